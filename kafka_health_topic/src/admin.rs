mod admin_wrapper;
mod rdkafka_session;
mod session;

pub use admin_wrapper::AdminWrapper;
pub use rdkafka_session::{RdKafkaAdminSession, RdKafkaAdminSessionFactory};
pub use session::{AdminSession, AdminSessionFactory};
