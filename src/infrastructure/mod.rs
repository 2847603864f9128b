pub mod stub_executor;
