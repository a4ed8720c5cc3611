use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use board_server::domain::StationDirectory;
use board_server::timetable::Timetable;
use board_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let stations = StationDirectory::standard();

    // BOARD_TIMETABLE points at an override file; otherwise the compiled-in
    // timetable is used.
    let timetable = match std::env::var("BOARD_TIMETABLE") {
        Ok(path) => {
            println!("Loading timetable from {path}");
            Timetable::from_file(&path, &stations).expect("Failed to load timetable file")
        }
        Err(_) => Timetable::embedded(&stations).expect("Failed to load embedded timetable"),
    };
    println!(
        "Loaded {} movements across {} stations",
        timetable.len(),
        stations.len()
    );

    let state = AppState::new(timetable, stations);
    let app = create_router(state, "static");

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Departure board listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the board.");
    println!();
    println!("Endpoints:");
    println!("  GET /health     - Health check");
    println!("  GET /           - Departure board (?station=BD|KAC)");
    println!("  GET /tracks     - Per-track view (?station=BD&track=2)");
    println!("  GET /api/board  - JSON feed (?station=BD&limit=10)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
