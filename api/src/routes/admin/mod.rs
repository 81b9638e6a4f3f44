pub mod admin_logs_route;
pub mod static_qa_route;
