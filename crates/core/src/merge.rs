use crate::types::VariableMap;

/// 合并多个扁平变量表
///
/// 功能：
/// - 处理 key 冲突（后者覆盖前者）
/// - 保持稳定输出顺序（使用 IndexMap，保留首次插入的位置）
pub fn merge_all<I>(maps: I) -> VariableMap
where
    I: IntoIterator<Item = VariableMap>,
{
    let mut merged = VariableMap::new();

    for map in maps {
        for (name, value) in map {
            // 后者覆盖前者
            if let Some(previous) = merged.insert(name.clone(), value) {
                log::debug!("variable '{}' overrides earlier value '{}'", name, previous);
            }
        }
    }

    merged
}
