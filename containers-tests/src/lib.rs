pub mod account;
pub mod address;
pub mod record;

#[cfg(test)]
mod laws;

#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
