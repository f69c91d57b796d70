// Nomofobia site, Leptos 0.8 CSR. Build with `trunk build --release`.

fn main() {
    nomofobia_landing::run();
}
