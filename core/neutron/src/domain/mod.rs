//! 領域基本定義（不含邏輯）

pub mod alias;
pub mod constants;
pub mod core_types;
