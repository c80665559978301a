// tests/integration/system/mod.rs
