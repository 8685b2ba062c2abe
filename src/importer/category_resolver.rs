// ==========================================
// 库存导入导出引擎 - 分类解析器实现
// ==========================================
// 职责: 分类文本 → 目录分类（先精确，后子串）
// 规则:
//   1. 空/空白/哨兵值 → None（调用方视为默认分类）
//   2. 小写+去空白后精确匹配
//   3. 默认分类标签（导出时写出的 "General"）未精确命中 → None，视为无分类
//   4. 双向子串匹配，按目录顺序取第一个
//   5. 均未命中 → None（调用方记为缺失分类）
// 已知限制: 多个分类共享子串时取目录顺序第一个，无额外消歧
// ==========================================

use crate::domain::inventory::Category;
use crate::importer::traits::CategoryResolver as CategoryResolverTrait;

pub struct CategoryResolver {
    no_category_sentinels: Vec<String>, // 已小写
    default_label: Option<String>,      // 已小写
}

impl CategoryResolver {
    pub fn new(no_category_sentinels: &[String]) -> Self {
        Self {
            no_category_sentinels: no_category_sentinels
                .iter()
                .map(|s| normalize_name(s))
                .collect(),
            default_label: None,
        }
    }

    /// 设置默认分类标签；目录中无同名分类时按无分类处理
    pub fn with_default_label(mut self, label: &str) -> Self {
        let label = normalize_name(label);
        self.default_label = (!label.is_empty()).then_some(label);
        self
    }

    fn is_sentinel(&self, name: &str) -> bool {
        name.is_empty() || self.no_category_sentinels.iter().any(|s| s == name)
    }

    fn is_default_label(&self, name: &str) -> bool {
        self.default_label.as_deref() == Some(name)
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        let config = crate::config::ImportConfig::default();
        Self::new(&config.no_category_sentinels).with_default_label(&config.default_category_label)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CategoryResolverTrait for CategoryResolver {
    fn is_no_category(&self, category_name: Option<&str>) -> bool {
        match category_name.map(normalize_name) {
            None => true,
            Some(name) => self.is_sentinel(&name) || self.is_default_label(&name),
        }
    }

    fn resolve<'a>(
        &self,
        category_name: Option<&str>,
        catalog: &'a [Category],
    ) -> Option<&'a Category> {
        let wanted = normalize_name(category_name?);
        if self.is_sentinel(&wanted) {
            return None;
        }

        // 精确匹配
        if let Some(exact) = catalog.iter().find(|c| normalize_name(&c.name) == wanted) {
            return Some(exact);
        }

        if self.is_default_label(&wanted) {
            return None;
        }

        // 子串匹配（双向）；空名分类不参与，否则会匹配任意输入
        catalog.iter().find(|c| {
            let candidate = normalize_name(&c.name);
            !candidate.is_empty() && (candidate.contains(&wanted) || wanted.contains(&candidate))
        })
    }
}
