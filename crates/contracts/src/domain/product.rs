use serde::{Deserialize, Serialize};

/// Одна запись каталога (товар). Read-only: каталог никогда не мутируется,
/// все отображения — чистые проекции.
///
/// `price` — это уже отформатированный текст ("$494.71"); никакая
/// арифметика над ним не выполняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub category: String,
    /// Rating in [0, 5], may be fractional
    pub rating: f64,
    /// Outbound navigation target for the product card
    pub link: String,
}
