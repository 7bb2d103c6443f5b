pub mod region_metrics;
