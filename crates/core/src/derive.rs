use crate::naming::to_variable_name;
use crate::types::{SemanticTable, VariableMap};

/// 将语义表派生为扁平变量表
///
/// - key：`to_variable_name(key, prefix)`
/// - value：`Numeric` 追加 `unit`，`Literal` 原样使用
///
/// 输出与输入一一对应，保持声明顺序。`unit` 为空串表示不追加单位。
pub fn derive_variable_table(table: &SemanticTable, prefix: &str, unit: &str) -> VariableMap {
    let derived: VariableMap = table
        .iter()
        .map(|(key, value)| (to_variable_name(key, prefix), value.with_unit(unit)))
        .collect();

    log::debug!("derived {} variables with prefix '{}'", derived.len(), prefix);

    derived
}
