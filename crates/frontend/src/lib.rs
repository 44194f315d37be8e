pub mod domain;
pub mod shared;

/// Инициализация логирования и перехвата паник в браузере
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

/// Вне браузера подписчик логов устанавливает приложение
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {}
