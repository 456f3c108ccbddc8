const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// 以 1024 进位格式化字节数：B 不带小数，其余保留一位小数
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(50 * 1024 * 1024), "50.0 MB");
        assert_eq!(format_file_size(3 * 1024u64.pow(4)), "3.0 TB");
        assert_eq!(format_file_size(2048 * 1024u64.pow(4)), "2048.0 TB");
    }
}
