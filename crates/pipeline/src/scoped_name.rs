use std::path::{Component, Path, PathBuf};

/// CSS Modules 作用域类名
///
/// 格式：`_{所在目录名}_{hash}__{类名}`
///
/// - hash：相对 `cwd` 的文件路径经 blake3 计算后取前 `hash_len` 位十六进制；
///   `cwd` 之外的文件以 `../` 开头
/// - 目录名：不含目录的文件名为 `.`，根目录下的文件为空串
///
/// 例如 `lib/app_web/cells/button/style.css` 中的 `root`
/// → `_button_<hash>__root`
pub fn generate_scoped_name(name: &str, filename: &Path, cwd: &Path, hash_len: usize) -> String {
    // 统一分隔符，保证跨平台 hash 稳定
    let relative = relative_path(filename, cwd)
        .to_string_lossy()
        .replace('\\', "/");

    let directory = match filename.parent() {
        Some(dir) if dir.as_os_str().is_empty() => ".".to_string(),
        Some(dir) => dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        None => String::new(),
    };

    let hex = format!("{}", blake3::hash(relative.as_bytes()));
    let short_hash = &hex[..hash_len.min(hex.len())];

    format!("_{}_{}__{}", directory, short_hash, name)
}

/// `filename` 相对 `cwd` 的路径；相对路径视为已相对于 `cwd`
fn relative_path(filename: &Path, cwd: &Path) -> PathBuf {
    if filename.is_relative() {
        return filename.to_path_buf();
    }

    let mut file = filename.components().peekable();
    let mut base = cwd.components().peekable();
    while let (Some(a), Some(b)) = (file.peek(), base.peek()) {
        if a != b {
            break;
        }
        file.next();
        base.next();
    }

    let mut relative = PathBuf::new();
    for component in base {
        if !matches!(component, Component::CurDir) {
            relative.push("..");
        }
    }
    relative.extend(file);
    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_name_format() {
        let name = generate_scoped_name(
            "root",
            Path::new("/app/lib/web/cells/button/style.css"),
            Path::new("/app"),
            5,
        );

        assert!(name.starts_with("_button_"));
        assert!(name.ends_with("__root"));
        // _ + button + _ + 5 + __ + root
        assert_eq!(name.len(), 1 + 6 + 1 + 5 + 2 + 4);
    }

    #[test]
    fn test_scoped_name_stability() {
        let file = Path::new("/app/lib/web/views/page/index.css");
        let a = generate_scoped_name("title", file, Path::new("/app"), 5);
        let b = generate_scoped_name("title", file, Path::new("/app"), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scoped_name_depends_on_relative_path() {
        // 同一相对路径在不同 checkout 位置产生相同的名字
        let a = generate_scoped_name(
            "title",
            Path::new("/a/lib/x/card.css"),
            Path::new("/a"),
            5,
        );
        let b = generate_scoped_name(
            "title",
            Path::new("/b/lib/x/card.css"),
            Path::new("/b"),
            5,
        );
        assert_eq!(a, b);

        let c = generate_scoped_name(
            "title",
            Path::new("/a/lib/y/card.css"),
            Path::new("/a"),
            5,
        );
        assert_ne!(a, c);
    }

    fn short_hash(input: &str) -> String {
        format!("{}", blake3::hash(input.as_bytes()))[..5].to_string()
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_path(Path::new("/app/lib/a.css"), Path::new("/app")),
            PathBuf::from("lib/a.css")
        );
        assert_eq!(
            relative_path(Path::new("/other/dir/a.css"), Path::new("/app/web")),
            PathBuf::from("../../other/dir/a.css")
        );
        assert_eq!(
            relative_path(Path::new("a.css"), Path::new("/app")),
            PathBuf::from("a.css")
        );
    }

    #[test]
    fn test_scoped_name_outside_cwd() {
        let name = generate_scoped_name("x", Path::new("/other/dir/a.css"), Path::new("/app"), 5);
        assert_eq!(name, format!("_dir_{}__x", short_hash("../other/dir/a.css")));

        // 与 checkout 位置无关
        let moved =
            generate_scoped_name("x", Path::new("/srv/other/dir/a.css"), Path::new("/srv/app"), 5);
        assert_eq!(name, moved);
    }

    #[test]
    fn test_scoped_name_bare_filename() {
        let name = generate_scoped_name("x", Path::new("a.css"), Path::new("/app"), 5);
        assert_eq!(name, format!("_._{}__x", short_hash("a.css")));
    }

    #[test]
    fn test_scoped_name_file_at_root() {
        let name = generate_scoped_name("x", Path::new("/a.css"), Path::new("/app"), 5);
        assert_eq!(name, format!("__{}__x", short_hash("../a.css")));
    }

    #[test]
    fn test_scoped_name_hash_len_clamped() {
        let name = generate_scoped_name("x", Path::new("/app/d/a.css"), Path::new("/app"), 100);
        // blake3 hex 为 64 位
        assert_eq!(name.len(), 1 + 1 + 1 + 64 + 2 + 1);
    }
}
