use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::time::Duration;
use tracing::{debug, error, warn};
use tracing_appender::non_blocking::WorkerGuard;

use tracked::config::AppConfig;
use tracked::routes;
use tracked::runtime::lifetime;
use tracked::utils::{json_error_handler, query_error_handler};

/// 初始化日志，返回的 guard 需要存活到进程退出
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .event_format(
            tracing_subscriber::fmt::format()
                .with_level(true)
                .with_ansi(config.is_development()),
        );

    // 开发环境输出可读文本，其余环境输出 JSON 行
    if config.is_development() {
        builder.with_file(true).with_line_number(true).init();
    } else {
        builder.json().init();
    }

    guard
}

fn cors(config: &AppConfig) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.cors.max_age)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_panic!();

    let started_at = chrono::Utc::now();

    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();
    let _log_guard = init_tracing(config);

    warn!(
        "{} {} starting ({} environment)",
        config.app.system_name,
        env!("CARGO_PKG_VERSION"),
        config.app.environment
    );

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            error!("Server startup failed: {}", e);
            std::io::Error::other(e.to_string())
        })?;
    let storage = startup.storage;
    let cache = startup.cache;

    debug!(
        "Startup finished in {} ms",
        (chrono::Utc::now() - started_at).num_milliseconds()
    );

    let limits = &config.server.limits;
    let timeouts = &config.server.timeouts;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-store"))
                    .add(("X-Content-Type-Options", "nosniff")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(
                web::JsonConfig::default()
                    .limit(limits.max_payload_size)
                    .error_handler(json_error_handler),
            )
            .app_data(web::PayloadConfig::new(limits.max_payload_size))
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .configure(routes::configure_api_routes)
    })
    .keep_alive(Duration::from_secs(timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(timeouts.client_disconnect))
    .workers(config.server.workers);

    warn!("Serving with {} worker(s)", config.server.workers);

    #[cfg(unix)]
    let server = match config.unix_socket_path() {
        Some(socket_path) => {
            // 上次异常退出可能留下套接字文件
            if std::path::Path::new(socket_path).exists() {
                std::fs::remove_file(socket_path)?;
            }
            warn!("Listening on unix:{}", socket_path);
            server.bind_uds(socket_path)?
        }
        None => {
            warn!("Listening on http://{}", config.server_bind_address());
            server.bind(config.server_bind_address())?
        }
    };

    #[cfg(not(unix))]
    let server = {
        warn!("Listening on http://{}", config.server_bind_address());
        server.bind(config.server_bind_address())?
    };

    tokio::select! {
        res = server.run() => res?,
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Shutdown signal received, stopping {}", config.app.system_name);
        }
    }

    Ok(())
}
