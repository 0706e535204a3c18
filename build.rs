fn main() {
    // Propagates ESP-IDF build metadata when building for the chip;
    // a no-op on plain host builds.
    embuild::espidf::sysenv::output();
}
