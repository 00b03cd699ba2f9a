// Prompt template constants for the literacy-poster composer.
// The composed document has exactly five `# `-numbered sections; validation
// and the section counter both key off these markers.

/// Marker that introduces every section heading.
pub const SECTION_MARKER: &str = "# ";

/// Section name fragments that must all appear in a complete prompt,
/// in document order.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "小报标题区",
    "小报主体",
    "必画物体与识字清单",
    "识字标注规则",
    "画风参数",
];

/// Prompts shorter than this are considered truncated.
pub const MIN_PROMPT_CHARS: usize = 100;

/// Placeholder rendered for a category with no usable entries. An empty
/// category is still shown, never omitted.
pub const EMPTY_CATEGORY_PLACEHOLDER: &str = "(暂无词汇)";

/// Style/quality anchors targeted by the optimizer. Each replacement is a
/// no-op when its anchor is absent.
pub const QUALITY_ANCHOR: &str =
    "8k resolution, high detail, vector illustration style, clean lines.";
pub const QUALITY_HIGH_DETAIL: &str = "8k resolution, ultra high detail, \
    intricate vector illustration style, extremely clean lines, professional quality.";

pub const STYLE_ANCHOR: &str = "Mary GrandPré style";
pub const STYLE_ENHANCED: &str = "Mary GrandPré style, Harry Potter book cover illustration style";

pub const LIGHTING_ANCHOR: &str = "cozy fireplace lighting";
pub const LIGHTING_ENHANCED: &str =
    "cozy fireplace lighting, cinematic lighting, soft shadows, gentle highlights";

/// Full poster prompt template. Replace `{theme}`, `{title}`,
/// `{core_actors}`, `{common_objects}`, `{environment}` before use.
pub const POSTER_PROMPT_TEMPLATE: &str = r#"请生成一张儿童识字小报《{theme}》，竖版 A4，学习插画版式，适合学习英文与看图识物。

# 一、小报标题区（顶部）

**顶部居中大标题**：《{title}》
* **风格**：手绘海报、哈利波特魔法风格
* **文本要求**：大字、醒目、卡通手写体、彩色描边
* **装饰**：周围添加与 {theme} 相关的贴纸风装饰，颜色鲜艳

# 二、小报主体（中间主画面）

画面中心是一幅 **卡通插画风的「{theme}」场景**：
* **整体气氛**：明亮、温暖、积极
* **构图**：物体边界清晰，方便对应文字，不要过于拥挤。

**场景分区与核心内容**
1.  **核心区域 A（主要对象）**：表现 {theme} 的核心活动。
2.  **核心区域 B（配套设施）**：展示相关的工具或物品。
3.  **核心区域 C（环境背景）**：体现环境特征（如墙面、指示牌等）。

**主题人物**
* **角色**：1 位可爱卡通人物（职业/身份：与 {theme} 匹配）。
* **动作**：正在进行与场景相关的自然互动。

# 三、必画物体与识字清单（Generated Content）

**请务必在画面中清晰绘制以下物体，并为其预留贴标签的位置：**

**1. 核心角色与设施：**
{core_actors}

**2. 常见物品/工具：**
{common_objects}

**3. 环境与装饰：**
{environment}

*(注意：画面中的物体数量不限于此，但以上列表必须作为重点描绘对象)*

# 四、识字标注规则

对上述清单中的物体，贴上中文识字标签：
* **格式**：两行制（第一行英文单词，第二行汉字翻译）。
* **样式**：彩色小贴纸风格，白底黑字或深色字，清晰可读。
* **排版**：标签靠近对应的物体，不遮挡主体。

# 五、画风参数
* **风格**：Mary GrandPré style
* **色彩**：warm amber and gold palette, soft pastel texture, magical swirling stars, cozy fireplace lighting, whimsical art, jewel tones, storybook illustration.
* **质量**：8k resolution, high detail, vector illustration style, clean lines."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_contains_all_required_sections() {
        for section in REQUIRED_SECTIONS {
            assert!(
                POSTER_PROMPT_TEMPLATE.contains(section),
                "template missing section '{section}'"
            );
        }
    }

    #[test]
    fn test_template_has_exactly_five_section_markers() {
        assert_eq!(POSTER_PROMPT_TEMPLATE.matches(SECTION_MARKER).count(), 5);
    }

    #[test]
    fn test_template_contains_optimizer_anchors() {
        assert!(POSTER_PROMPT_TEMPLATE.contains(QUALITY_ANCHOR));
        assert!(POSTER_PROMPT_TEMPLATE.contains(STYLE_ANCHOR));
        assert!(POSTER_PROMPT_TEMPLATE.contains(LIGHTING_ANCHOR));
    }
}
