// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 去掉URL末尾的文件名和查询串，只保留目录前缀
///
/// `http://a.com/x/y?q=1` 与 `http://a.com/x/z` 都会得到 `http://a.com/x`，
/// 用于风险巡航目标的去重。
///
/// # 参数
///
/// * `raw` - 带协议的URL
///
/// # 返回值
///
/// * `Some(String)` - `scheme://host[:port]` 加上路径的目录部分（不含末尾 `/`）
/// * `None` - URL无法解析或没有主机部分
pub fn cut_filename(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str().filter(|host| !host.is_empty())?;

    let mut base = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        base.push(':');
        base.push_str(&port.to_string());
    }

    let path = parsed.path();
    let dir = path.rfind('/').map(|idx| &path[..idx]).unwrap_or("");
    base.push_str(dir.trim_end_matches('/'));
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_filename_strips_file_and_query() {
        assert_eq!(
            cut_filename("http://a.com/x/y?q=1").as_deref(),
            Some("http://a.com/x")
        );
        assert_eq!(
            cut_filename("http://a.com/x/z").as_deref(),
            Some("http://a.com/x")
        );
    }

    #[test]
    fn test_cut_filename_root_paths() {
        assert_eq!(cut_filename("https://a.com").as_deref(), Some("https://a.com"));
        assert_eq!(cut_filename("https://a.com/").as_deref(), Some("https://a.com"));
        assert_eq!(
            cut_filename("https://a.com/index.php").as_deref(),
            Some("https://a.com")
        );
    }

    #[test]
    fn test_cut_filename_keeps_directory_and_port() {
        assert_eq!(
            cut_filename("http://a.com:8080/admin/").as_deref(),
            Some("http://a.com:8080/admin")
        );
        // default ports are dropped by the parser
        assert_eq!(
            cut_filename("http://a.com:80/x/y").as_deref(),
            Some("http://a.com/x")
        );
    }

    #[test]
    fn test_cut_filename_rejects_hostless() {
        assert_eq!(cut_filename("not a url"), None);
        assert_eq!(cut_filename("file:///etc/passwd"), None);
    }
}
