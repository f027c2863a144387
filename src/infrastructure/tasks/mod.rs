mod animation;
mod dhcp_server;
mod http_server;
mod network;

pub use animation::animation_task;
pub use dhcp_server::dhcp_server_task;
pub use http_server::http_server_task;
pub use network::{access_point_task, network_runner_task, station_link_task};
