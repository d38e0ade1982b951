/// camelCase → dash-case
///
/// 每个大写字母替换为 `-` + 小写形式，其余字符原样保留：
/// - "borderRadius" → "border-radius"
/// - "gray99" → "gray99"
/// - "desktopLarge" → "desktop-large"
pub fn dash_case(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + 4);

    for ch in identifier.chars() {
        if ch.is_ascii_uppercase() {
            result.push('-');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// 生成 CSS 变量名：`--{prefix}-{dash-case(identifier)}`
///
/// 不做转义，调用方需保证 identifier 与 prefix 是合法的 CSS 标识符片段。
pub fn to_variable_name(identifier: &str, prefix: &str) -> String {
    format!("--{}-{}", prefix, dash_case(identifier))
}

/// 无前缀的变量名：`--{dash-case(identifier)}`，用于自定义媒体查询
pub fn to_bare_variable_name(identifier: &str) -> String {
    format!("--{}", dash_case(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// dash_case 的逆变换，仅用于测试
    fn undo_dash_case(s: &str) -> String {
        let mut result = String::new();
        let mut capitalize_next = false;

        for ch in s.chars() {
            if ch == '-' {
                capitalize_next = true;
            } else if capitalize_next {
                result.push(ch.to_ascii_uppercase());
                capitalize_next = false;
            } else {
                result.push(ch);
            }
        }

        result
    }

    #[test]
    fn test_dash_case_basic() {
        assert_eq!(dash_case("borderRadius"), "border-radius");
        assert_eq!(dash_case("wizardSidebarMinWidth"), "wizard-sidebar-min-width");
        assert_eq!(dash_case("phone"), "phone");
    }

    #[test]
    fn test_dash_case_digits_pass_through() {
        assert_eq!(dash_case("gray99"), "gray99");
        assert_eq!(dash_case("theme1"), "theme1");
    }

    #[test]
    fn test_dash_case_leading_uppercase() {
        // 首字母大写也会插入连字符（不是 camelCase 的输入）
        assert_eq!(dash_case("Phone"), "-phone");
    }

    #[test]
    fn test_dash_case_empty() {
        assert_eq!(dash_case(""), "");
    }

    #[test]
    fn test_dash_case_round_trip_letters_only() {
        for ident in [
            "borderRadius",
            "navigationHeight",
            "formInputDisabledBackground",
            "headingExtraLarge",
            "a",
            "aBCd",
        ] {
            assert_eq!(undo_dash_case(&dash_case(ident)), ident);
        }
    }

    #[test]
    fn test_to_variable_name() {
        assert_eq!(
            to_variable_name("borderRadius", "size"),
            "--size-border-radius"
        );
        assert_eq!(
            to_variable_name("headingMedium", "font-size"),
            "--font-size-heading-medium"
        );
    }

    #[test]
    fn test_to_bare_variable_name() {
        assert_eq!(to_bare_variable_name("desktopLarge"), "--desktop-large");
    }
}
