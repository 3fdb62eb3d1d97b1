fn main() {
    horizon_ui::mount();
}
