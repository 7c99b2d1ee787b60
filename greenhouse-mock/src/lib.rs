use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::time;

use crate::device::MockDevice;
use crate::routes::create_app;
use crate::settings::Settings;

pub mod device;
pub mod routes;
pub mod settings;
pub mod simulate;

pub async fn run(settings: &Arc<Settings>) {
    let device = Arc::new(RwLock::new(MockDevice::new(&settings.thresholds)));

    let simulated = device.clone();
    let tick = Duration::from_millis(settings.mock.tick_ms);
    tokio::spawn(async move {
        let mut interval = time::interval(tick);
        loop {
            interval.tick().await;

            let mut device = simulated.write().await;
            let mut rng = rand::rng();
            device.advance(&mut rng);
        }
    });

    let app = create_app(device);

    let ip_addr = settings.mock.host.parse::<IpAddr>().unwrap();

    let address = SocketAddr::from((ip_addr, settings.mock.port));

    let listener = TcpListener::bind(&address).await.unwrap();

    tracing::info!("simulated device listening on {:?}", address);

    axum::serve(listener, app).await.unwrap();
}
