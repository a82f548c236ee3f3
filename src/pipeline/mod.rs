pub mod stage1_distributions;
pub mod stage2_target;
pub mod stage3_subscores;
pub mod stage4_payments;
pub mod stage5_compile;
pub mod stage6_report;
