//! Trunk entry point

fn main() {
    #[cfg(feature = "csr")]
    adintel_dashboard::mount();
}
