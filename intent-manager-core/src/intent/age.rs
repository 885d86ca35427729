//! “距上次更新时间”的粗粒度文本

/// 从大到小的时间单位（秒）
const UNITS: [(i64, &str); 5] = [
    (31_536_000, "years"),
    (2_592_000, "months"),
    (86_400, "days"),
    (3_600, "hours"),
    (60, "minutes"),
];

/// 将经过的秒数转换为文本
///
/// 某个单位的计数必须严格大于 1 才会选中，计数恰为 1 时落入下一个更小的单位：
/// 恰好 60 秒显示 `"seconds"`，恰好 3600 秒显示 `"60 minutes"`。
pub fn humanize_elapsed(seconds: i64) -> String {
    for (unit, label) in UNITS {
        let count = seconds.div_euclid(unit);
        if count > 1 {
            return format!("{count} {label}");
        }
    }
    "seconds".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_is_seconds() {
        assert_eq!(humanize_elapsed(0), "seconds");
        assert_eq!(humanize_elapsed(59), "seconds");
    }

    #[test]
    fn test_exact_unit_boundaries_fall_through() {
        assert_eq!(humanize_elapsed(60), "seconds");
        assert_eq!(humanize_elapsed(3_600), "60 minutes");
        assert_eq!(humanize_elapsed(86_400), "24 hours");
        assert_eq!(humanize_elapsed(2_592_000), "30 days");
        assert_eq!(humanize_elapsed(31_536_000), "12 months");
    }

    #[test]
    fn test_counts_above_one_select_the_unit() {
        assert_eq!(humanize_elapsed(119), "seconds");
        assert_eq!(humanize_elapsed(120), "2 minutes");
        assert_eq!(humanize_elapsed(7_200), "2 hours");
        assert_eq!(humanize_elapsed(172_800), "2 days");
        assert_eq!(humanize_elapsed(5_184_000), "2 months");
        assert_eq!(humanize_elapsed(63_072_000), "2 years");
    }

    #[test]
    fn test_negative_elapsed_is_seconds() {
        assert_eq!(humanize_elapsed(-5), "seconds");
    }
}
