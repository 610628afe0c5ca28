fn main() {
    mf_landing::mount();
}
