use crate::types::tier::PressureTier;

pub static PRESSURE_TIERS: [PressureTier; 8] = [
    PressureTier {
        level: 1,
        range: (0, 12),
        tag: "春节隐身王者",
        keywords: &["零压力", "糊弄大师", "反客为主"],
        description: "全程没人烦你，还能把亲戚聊到主动撤退，主打一个 “关我屁事”。",
    },
    PressureTier {
        level: 2,
        range: (13, 25),
        tag: "春节气氛组",
        keywords: &["低压力", "佛系", "社交舒适"],
        description: "偶尔被问两句，随便糊弄就过关，全程吃好喝好，主打 “快乐躺平”。",
    },
    PressureTier {
        level: 3,
        range: (26, 38),
        tag: "轻度防御选手",
        keywords: &["微压力", "有备而来", "话术在线"],
        description: "提前准备了标准答案，应付常规提问没问题，偶尔被突袭会小尴尬。",
    },
    PressureTier {
        level: 4,
        range: (39, 51),
        tag: "中场抗压玩家",
        keywords: &["中低压力", "张弛有度", "选择性回应"],
        description: "能应对大部分围攻，但连续作战会累，需要躲回房间 “回血”。",
    },
    PressureTier {
        level: 5,
        range: (52, 64),
        tag: "高压破防预备役",
        keywords: &["中高压力", "敏感体质", "易被戳中"],
        description: "催婚 / 问工资是高频雷区，表面强撑微笑，内心已经在 “渡劫”。",
    },
    PressureTier {
        level: 6,
        range: (65, 77),
        tag: "春节渡劫难民",
        keywords: &["高压力", "密集轰炸", "身心俱疲"],
        description: "每天被安排满相亲 / 聚餐，亲戚人均 “包打听”，压力大到想提前返程。",
    },
    PressureTier {
        level: 7,
        range: (78, 90),
        tag: "红色警报重症",
        keywords: &["极高压力", "社恐爆发", "情绪耗竭"],
        description: "听到亲戚声音就紧张，失眠 / 食欲不振，需要靠打游戏 / 躲厕所逃避。",
    },
    PressureTier {
        level: 8,
        range: (91, 100),
        tag: "春节逃离计划",
        keywords: &["极限压力", "全面崩盘", "急需撤离"],
        description: "完全无法应对，只想立刻买机票回家，属于 “再待一天就崩溃” 的紧急状态。",
    },
];
