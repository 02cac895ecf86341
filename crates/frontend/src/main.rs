use hearth_frontend::App;

fn main() {
    hearth_frontend::logging::init();
    yew::Renderer::<App>::new().render();
}
