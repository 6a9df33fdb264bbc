fn main() {
    yew::Renderer::<isukuhub_ui::App>::new().render();
}
