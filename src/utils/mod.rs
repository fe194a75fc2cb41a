pub mod plotting;
