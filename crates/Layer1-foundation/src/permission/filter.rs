//! 카테고리 필터

use super::types::{Category, PermissionRecord};

/// 카테고리가 같은 항목만 남긴다 (순서 유지). `None`이면 전체.
pub fn filter(records: &[PermissionRecord], category: Option<Category>) -> Vec<PermissionRecord> {
    match category {
        Some(category) => records
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

/// 주어진 카테고리 중 하나에 속하는 항목만 남긴다. 빈 목록이면 전체.
pub fn filter_any(records: &[PermissionRecord], categories: &[Category]) -> Vec<PermissionRecord> {
    if categories.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| categories.contains(&r.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::Classifier;

    fn sample() -> Vec<PermissionRecord> {
        Classifier::builtin().classify_all([
            "android.permission.READ_SMS",
            "android.permission.INTERNET",
            "com.example.permission.CUSTOM",
            "android.permission.CAMERA",
            "android.permission.READ_LOGS",
        ])
    }

    fn names(records: &[PermissionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let records = sample();
        let dangerous = filter(&records, Some(Category::Dangerous));
        assert_eq!(
            names(&dangerous),
            vec!["android.permission.READ_SMS", "android.permission.CAMERA"]
        );

        let unknown = filter(&records, Some(Category::Unknown));
        assert_eq!(names(&unknown), vec!["com.example.permission.CUSTOM"]);
    }

    #[test]
    fn test_filter_none_keeps_all() {
        let records = sample();
        assert_eq!(filter(&records, None), records);
    }

    #[test]
    fn test_filter_any() {
        let records = sample();
        let sensitive = filter_any(&records, &[Category::Signature, Category::Dangerous]);
        assert_eq!(
            names(&sensitive),
            vec![
                "android.permission.READ_SMS",
                "android.permission.CAMERA",
                "android.permission.READ_LOGS"
            ]
        );
        assert_eq!(filter_any(&records, &[]), records);
    }
}
