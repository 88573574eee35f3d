fn main() {
    dioxus::launch(staticgen_mocks::App);
}
