//! Built-in theme reference data: ten preset children's learning scenes,
//! the keyword→theme fallback mapping, and the generic default set.
//!
//! Everything here is `&'static` and read-only after initialization. The
//! resolver takes these tables by reference so tests can swap in fixtures.

use super::models::{VocabularyEntry, VocabularyEntrySet};

/// One row of the theme reference table. Entries are `(term, gloss)` pairs
/// in their fixed declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRecord {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub core_actors: &'static [(&'static str, &'static str)],
    pub common_objects: &'static [(&'static str, &'static str)],
    pub environment: &'static [(&'static str, &'static str)],
}

impl ThemeRecord {
    /// Materializes the row into an owned, uncapped entry set.
    pub fn vocabulary(&self) -> VocabularyEntrySet {
        fn owned(pairs: &[(&str, &str)]) -> Vec<VocabularyEntry> {
            pairs
                .iter()
                .map(|&(term, gloss)| VocabularyEntry::new(term, gloss))
                .collect()
        }

        VocabularyEntrySet {
            core_actors: owned(self.core_actors),
            common_objects: owned(self.common_objects),
            environment: owned(self.environment),
        }
    }
}

/// Many-to-one surface-form → canonical-theme mapping used for fallback
/// matching. Scanned in declaration order; first match wins.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub surface_form: &'static str,
    pub theme_id: &'static str,
}

pub const THEMES: &[ThemeRecord] = &[
    ThemeRecord {
        id: "supermarket",
        display_name: "超市",
        description: "购物场景，学习食品和日常用品词汇",
        core_actors: &[
            ("cashier", "收银员"),
            ("shopper", "购物者"),
            ("manager", "经理"),
            ("customer", "顾客"),
            ("clerk", "店员"),
        ],
        common_objects: &[
            ("apple", "苹果"),
            ("banana", "香蕉"),
            ("milk", "牛奶"),
            ("bread", "面包"),
            ("vegetables", "蔬菜"),
            ("meat", "肉"),
            ("eggs", "鸡蛋"),
            ("cheese", "奶酪"),
            ("juice", "果汁"),
            ("cookies", "饼干"),
        ],
        environment: &[
            ("shelves", "货架"),
            ("checkout", "收银台"),
            ("cart", "购物车"),
            ("basket", "购物篮"),
            ("freezer", "冷冻柜"),
            ("scale", "秤"),
            ("price tag", "价格标签"),
        ],
    },
    ThemeRecord {
        id: "hospital",
        display_name: "医院",
        description: "医疗场景，学习医疗相关词汇",
        core_actors: &[
            ("doctor", "医生"),
            ("nurse", "护士"),
            ("patient", "病人"),
            ("surgeon", "外科医生"),
            ("dentist", "牙医"),
        ],
        common_objects: &[
            ("stethoscope", "听诊器"),
            ("medicine", "药品"),
            ("syringe", "注射器"),
            ("thermometer", "体温计"),
            ("bandage", "绷带"),
            ("pill", "药丸"),
            ("wheelchair", "轮椅"),
            ("ambulance", "救护车"),
            ("x-ray", "X光片"),
            ("surgery table", "手术台"),
        ],
        environment: &[
            ("hospital bed", "病床"),
            ("ward", "病房"),
            ("reception", "接待处"),
            ("waiting room", "候诊室"),
            ("operation room", "手术室"),
            ("medical chart", "病历表"),
        ],
    },
    ThemeRecord {
        id: "park",
        display_name: "公园",
        description: "户外场景，学习自然和娱乐词汇",
        core_actors: &[
            ("child", "孩子"),
            ("parent", "家长"),
            ("gardener", "园丁"),
            ("dog walker", "遛狗者"),
            ("tourist", "游客"),
        ],
        common_objects: &[
            ("tree", "树"),
            ("flower", "花"),
            ("grass", "草地"),
            ("bench", "长椅"),
            ("swing", "秋千"),
            ("slide", "滑梯"),
            ("seesaw", "跷跷板"),
            ("fountain", "喷泉"),
            ("bird", "鸟"),
            ("butterfly", "蝴蝶"),
        ],
        environment: &[
            ("playground", "游乐场"),
            ("path", "小路"),
            ("pond", "池塘"),
            ("bridge", "桥"),
            ("statue", "雕像"),
            ("lamp post", "路灯"),
        ],
    },
    ThemeRecord {
        id: "school",
        display_name: "学校",
        description: "学习场景，学习学校和教育词汇",
        core_actors: &[
            ("teacher", "老师"),
            ("student", "学生"),
            ("principal", "校长"),
            ("librarian", "图书管理员"),
            ("janitor", "清洁工"),
        ],
        common_objects: &[
            ("book", "书"),
            ("pencil", "铅笔"),
            ("eraser", "橡皮"),
            ("notebook", "笔记本"),
            ("backpack", "书包"),
            ("desk", "书桌"),
            ("chair", "椅子"),
            ("blackboard", "黑板"),
            ("chalk", "粉笔"),
            ("globe", "地球仪"),
        ],
        environment: &[
            ("classroom", "教室"),
            ("library", "图书馆"),
            ("playground", "操场"),
            ("cafeteria", "食堂"),
            ("gym", "体育馆"),
            ("office", "办公室"),
        ],
    },
    ThemeRecord {
        id: "zoo",
        display_name: "动物园",
        description: "动物场景，学习动物和自然词汇",
        core_actors: &[
            ("zookeeper", "动物园管理员"),
            ("visitor", "游客"),
            ("guide", "导游"),
            ("child", "孩子"),
        ],
        common_objects: &[
            ("lion", "狮子"),
            ("elephant", "大象"),
            ("giraffe", "长颈鹿"),
            ("monkey", "猴子"),
            ("panda", "熊猫"),
            ("tiger", "老虎"),
            ("zebra", "斑马"),
            ("bird", "鸟"),
            ("snake", "蛇"),
            ("penguin", "企鹅"),
        ],
        environment: &[
            ("cage", "笼子"),
            ("enclosure", "围栏"),
            ("habitat", "栖息地"),
            ("sign", "指示牌"),
            ("map", "地图"),
            ("ticket booth", "售票亭"),
        ],
    },
    ThemeRecord {
        id: "beach",
        display_name: "海滩",
        description: "海滨场景，学习海洋和度假词汇",
        core_actors: &[
            ("swimmer", "游泳者"),
            ("surfer", "冲浪者"),
            ("lifeguard", "救生员"),
            ("child", "孩子"),
            ("tourist", "游客"),
        ],
        common_objects: &[
            ("sand", "沙子"),
            ("sea", "大海"),
            ("shell", "贝壳"),
            ("starfish", "海星"),
            ("wave", "海浪"),
            ("umbrella", "太阳伞"),
            ("towel", "毛巾"),
            ("sunglasses", "太阳镜"),
            ("sunscreen", "防晒霜"),
            ("bucket", "水桶"),
        ],
        environment: &[
            ("shore", "海岸"),
            ("pier", "码头"),
            ("lifeguard tower", "救生员塔"),
            ("palm tree", "棕榈树"),
            ("horizon", "地平线"),
            ("sun", "太阳"),
        ],
    },
    ThemeRecord {
        id: "farm",
        display_name: "农场",
        description: "农业场景，学习农场和动物词汇",
        core_actors: &[
            ("farmer", "农民"),
            ("worker", "工人"),
            ("child", "孩子"),
        ],
        common_objects: &[
            ("cow", "牛"),
            ("pig", "猪"),
            ("chicken", "鸡"),
            ("duck", "鸭"),
            ("horse", "马"),
            ("sheep", "羊"),
            ("goat", "山羊"),
            ("tractor", "拖拉机"),
            ("barn", "谷仓"),
            ("hay", "干草"),
        ],
        environment: &[
            ("field", "田野"),
            ("fence", "栅栏"),
            ("farmhouse", "农舍"),
            ("pond", "池塘"),
            ("tree", "树"),
            ("gate", "大门"),
        ],
    },
    ThemeRecord {
        id: "restaurant",
        display_name: "餐厅",
        description: "餐饮场景，学习食物和餐具词汇",
        core_actors: &[
            ("waiter", "服务员"),
            ("chef", "厨师"),
            ("customer", "顾客"),
            ("cashier", "收银员"),
            ("manager", "经理"),
        ],
        common_objects: &[
            ("menu", "菜单"),
            ("plate", "盘子"),
            ("fork", "叉子"),
            ("knife", "刀"),
            ("spoon", "勺子"),
            ("glass", "玻璃杯"),
            ("napkin", "餐巾纸"),
            ("food", "食物"),
            ("drink", "饮料"),
            ("bill", "账单"),
        ],
        environment: &[
            ("table", "桌子"),
            ("chair", "椅子"),
            ("kitchen", "厨房"),
            ("counter", "柜台"),
            ("sign", "招牌"),
            ("window", "窗户"),
        ],
    },
    ThemeRecord {
        id: "library",
        display_name: "图书馆",
        description: "阅读场景，学习书籍和学习词汇",
        core_actors: &[
            ("librarian", "图书管理员"),
            ("reader", "读者"),
            ("student", "学生"),
            ("researcher", "研究者"),
        ],
        common_objects: &[
            ("book", "书"),
            ("shelf", "书架"),
            ("magazine", "杂志"),
            ("newspaper", "报纸"),
            ("computer", "电脑"),
            ("desk", "书桌"),
            ("chair", "椅子"),
            ("catalog", "目录"),
            ("bookmark", "书签"),
            ("reading lamp", "阅读灯"),
        ],
        environment: &[
            ("reading room", "阅览室"),
            ("study area", "学习区"),
            ("information desk", "咨询台"),
            ("quiet zone", "安静区"),
            ("entrance", "入口"),
            ("exit", "出口"),
        ],
    },
    ThemeRecord {
        id: "amusementpark",
        display_name: "游乐园",
        description: "娱乐场景，学习游乐设施和娱乐词汇",
        core_actors: &[
            ("child", "孩子"),
            ("parent", "家长"),
            ("clown", "小丑"),
            ("operator", "操作员"),
            ("visitor", "游客"),
        ],
        common_objects: &[
            ("roller coaster", "过山车"),
            ("ferris wheel", "摩天轮"),
            ("carousel", "旋转木马"),
            ("swing ride", "旋转秋千"),
            ("bumper cars", "碰碰车"),
            ("ticket", "门票"),
            ("cotton candy", "棉花糖"),
            ("popcorn", "爆米花"),
            ("balloon", "气球"),
            ("prize", "奖品"),
        ],
        environment: &[
            ("entrance gate", "入口大门"),
            ("path", "小路"),
            ("ride", "游乐设施"),
            ("food stall", "食品摊"),
            ("rest area", "休息区"),
            ("map board", "地图板"),
        ],
    },
];

/// Keyword fallback rules: Chinese surface forms first, then English.
/// Declaration order is the resolution order.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule { surface_form: "超市", theme_id: "supermarket" },
    KeywordRule { surface_form: "市场", theme_id: "supermarket" },
    KeywordRule { surface_form: "商店", theme_id: "supermarket" },
    KeywordRule { surface_form: "医院", theme_id: "hospital" },
    KeywordRule { surface_form: "诊所", theme_id: "hospital" },
    KeywordRule { surface_form: "医疗", theme_id: "hospital" },
    KeywordRule { surface_form: "公园", theme_id: "park" },
    KeywordRule { surface_form: "花园", theme_id: "park" },
    KeywordRule { surface_form: "绿地", theme_id: "park" },
    KeywordRule { surface_form: "学校", theme_id: "school" },
    KeywordRule { surface_form: "教室", theme_id: "school" },
    KeywordRule { surface_form: "校园", theme_id: "school" },
    KeywordRule { surface_form: "动物园", theme_id: "zoo" },
    KeywordRule { surface_form: "动物", theme_id: "zoo" },
    KeywordRule { surface_form: "海滩", theme_id: "beach" },
    KeywordRule { surface_form: "海边", theme_id: "beach" },
    KeywordRule { surface_form: "沙滩", theme_id: "beach" },
    KeywordRule { surface_form: "农场", theme_id: "farm" },
    KeywordRule { surface_form: "农田", theme_id: "farm" },
    KeywordRule { surface_form: "养殖", theme_id: "farm" },
    KeywordRule { surface_form: "餐厅", theme_id: "restaurant" },
    KeywordRule { surface_form: "饭店", theme_id: "restaurant" },
    KeywordRule { surface_form: "餐馆", theme_id: "restaurant" },
    KeywordRule { surface_form: "图书馆", theme_id: "library" },
    KeywordRule { surface_form: "书馆", theme_id: "library" },
    KeywordRule { surface_form: "图书", theme_id: "library" },
    KeywordRule { surface_form: "游乐园", theme_id: "amusementpark" },
    KeywordRule { surface_form: "游乐场", theme_id: "amusementpark" },
    KeywordRule { surface_form: "乐园", theme_id: "amusementpark" },
    KeywordRule { surface_form: "supermarket", theme_id: "supermarket" },
    KeywordRule { surface_form: "market", theme_id: "supermarket" },
    KeywordRule { surface_form: "shop", theme_id: "supermarket" },
    KeywordRule { surface_form: "store", theme_id: "supermarket" },
    KeywordRule { surface_form: "hospital", theme_id: "hospital" },
    KeywordRule { surface_form: "clinic", theme_id: "hospital" },
    KeywordRule { surface_form: "medical", theme_id: "hospital" },
    KeywordRule { surface_form: "park", theme_id: "park" },
    KeywordRule { surface_form: "garden", theme_id: "park" },
    KeywordRule { surface_form: "school", theme_id: "school" },
    KeywordRule { surface_form: "classroom", theme_id: "school" },
    KeywordRule { surface_form: "zoo", theme_id: "zoo" },
    KeywordRule { surface_form: "animal", theme_id: "zoo" },
    KeywordRule { surface_form: "beach", theme_id: "beach" },
    KeywordRule { surface_form: "seaside", theme_id: "beach" },
    KeywordRule { surface_form: "farm", theme_id: "farm" },
    KeywordRule { surface_form: "restaurant", theme_id: "restaurant" },
    KeywordRule { surface_form: "cafe", theme_id: "restaurant" },
    KeywordRule { surface_form: "library", theme_id: "library" },
    KeywordRule { surface_form: "amusement park", theme_id: "amusementpark" },
    KeywordRule { surface_form: "amusementpark", theme_id: "amusementpark" },
    KeywordRule { surface_form: "playground", theme_id: "amusementpark" },
];

/// Generic fallback used when nothing matches or the input is blank.
pub const DEFAULT_THEME: ThemeRecord = ThemeRecord {
    id: "default",
    display_name: "通用场景",
    description: "儿童学习场景",
    core_actors: &[
        ("person", "人物"),
        ("child", "孩子"),
        ("adult", "成人"),
    ],
    common_objects: &[
        ("object", "物体"),
        ("item", "物品"),
        ("thing", "东西"),
    ],
    environment: &[
        ("background", "背景"),
        ("environment", "环境"),
        ("scene", "场景"),
    ],
};
