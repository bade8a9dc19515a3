use crate::types::quiz::{Dimension, Question, QuestionOption};

const fn opt(label: &'static str, text: &'static str, weight: f64) -> QuestionOption {
    QuestionOption {
        label,
        text,
        weight,
    }
}

pub static QUESTIONS: [Question; 25] = [
    // EXTERNAL, questions 1-9
    Question {
        id: 1,
        text: "你的婚姻 / 恋爱状况是？",
        dimension: Dimension::External,
        options: &[
            opt("A", "单身（母胎 solo / 刚分手）", 1.0),
            opt("B", "恋爱中（家里不满意 / 不想公开）", 0.6),
            opt("C", "已婚未育", 0.3),
            opt("D", "已婚已育（被催生二胎 / 三胎）", 0.0),
        ],
    },
    Question {
        id: 2,
        text: "关于你的工作，目前的状态是？",
        dimension: Dimension::External,
        options: &[
            opt("A", "待业 / 失业 / 刚转行（不稳定）", 1.0),
            opt("B", "创业中（收入波动大）", 0.6),
            opt("C", "在职（工资一般，没升职）", 0.3),
            opt("D", "在职（高薪 / 管理层 / 体制内）", 0.0),
        ],
    },
    Question {
        id: 3,
        text: "今年春节，你预计会有多少亲戚聚集？",
        dimension: Dimension::External,
        options: &[
            opt("A", "20 人以上（大家族，全是长辈）", 1.0),
            opt("B", "10-20 人（常规聚餐）", 0.6),
            opt("C", "3-10 人（小家庭为主）", 0.3),
            opt("D", "独自过年 / 仅父母（无亲戚压力）", 0.0),
        ],
    },
    Question {
        id: 4,
        text: "你的亲戚中，有多少人喜欢 \"打听八卦 + 比较\"？",
        dimension: Dimension::External,
        options: &[
            opt("A", "很多（人均 \"包打听\"）", 1.0),
            opt("B", "一半一半（有几个特别活跃）", 0.6),
            opt("C", "少数（偶尔被问）", 0.3),
            opt("D", "几乎没有（大家都很佛系）", 0.0),
        ],
    },
    Question {
        id: 5,
        text: "父母对你的春节期待值高吗？",
        dimension: Dimension::External,
        options: &[
            opt("A", "极高（必须带对象 / 必须升职 / 必须生娃）", 1.0),
            opt("B", "较高（希望你能更优秀）", 0.6),
            opt("C", "一般（平安健康就好）", 0.3),
            opt("D", "无期待（完全放养）", 0.0),
        ],
    },
    Question {
        id: 6,
        text: "春节期间，你被安排了相亲 / 聚会的数量是？",
        dimension: Dimension::External,
        options: &[
            opt("A", "3 场以上（排满了）", 1.0),
            opt("B", "1-2 场（推不掉）", 0.6),
            opt("C", "0 场（但可能会被临时安排）", 0.3),
            opt("D", "0 场（明确拒绝，家里尊重）", 0.0),
        ],
    },
    Question {
        id: 7,
        text: "你的同龄人（发小 / 同学）现状如何？",
        dimension: Dimension::External,
        options: &[
            opt("A", "大多结婚生子、事业有成（压力巨大）", 1.0),
            opt("B", "一半混得好，一半一般", 0.6),
            opt("C", "大家都差不多（摆烂为主）", 0.3),
            opt("D", "我是混得最好的那个（反向凡尔赛）", 0.0),
        ],
    },
    Question {
        id: 8,
        text: "你今年给家里的红包 / 礼物预算是？",
        dimension: Dimension::External,
        options: &[
            opt("A", "超过月收入 50%（肉痛）", 1.0),
            opt("B", "约月收入 30%（常规）", 0.6),
            opt("C", "约月收入 10%（意思一下）", 0.3),
            opt("D", "家里给我发红包（无压力）", 0.0),
        ],
    },
    Question {
        id: 9,
        text: "你回家的交通方式是？",
        dimension: Dimension::External,
        options: &[
            opt("A", "抢票难 / 路途遥远 / 转车多次（身心俱疲）", 1.0),
            opt("B", "自驾（堵车风险大）", 0.6),
            opt("C", "高铁 / 飞机直达（比较顺利）", 0.3),
            opt("D", "就在本地 / 住家里（无交通压力）", 0.0),
        ],
    },
    // INTERNAL, questions 10-17
    Question {
        id: 10,
        text: "面对亲戚的过度关心（如 \"工资多少\"），你的第一反应是？",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "极度反感，想当场翻脸（但忍住了）", 1.0),
            opt("B", "尴尬又无奈，只能打哈哈", 0.6),
            opt("C", "内心吐槽，表面微笑应对", 0.3),
            opt("D", "无所谓，如实回答或直接糊弄", 0.0),
        ],
    },
    Question {
        id: 11,
        text: "你的性格更偏向于？",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "社恐（害怕和不熟的人说话）", 1.0),
            opt("B", "慢热（熟了才话多）", 0.6),
            opt("C", "外向（能聊，但烦这种话题）", 0.3),
            opt("D", "社牛（能把天聊死，反客为主）", 0.0),
        ],
    },
    Question {
        id: 12,
        text: "你对 \"传统习俗\" 的态度是？",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "厌烦（磕头、敬酒、繁琐礼节）", 1.0),
            opt("B", "不喜欢但会配合（为了不挨骂）", 0.6),
            opt("C", "无所谓（跟着走流程）", 0.3),
            opt("D", "喜欢（觉得有年味）", 0.0),
        ],
    },
    Question {
        id: 13,
        text: "如果被催婚 / 催生，你会感到？",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "焦虑、自我怀疑（压力来源）", 1.0),
            opt("B", "烦躁、愤怒（凭什么管我）", 0.6),
            opt("C", "好笑、离谱（看他们表演）", 0.3),
            opt("D", "理解、无奈（知道他们是好意）", 0.0),
        ],
    },
    Question {
        id: 14,
        text: "你是否有 \"春节必须衣锦还乡\" 的心理包袱？",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "很重（混不好不敢回）", 1.0),
            opt("B", "有一点（怕被比下去）", 0.6),
            opt("C", "轻微（穿得好看就行）", 0.3),
            opt("D", "完全没有（舒服最重要）", 0.0),
        ],
    },
    Question {
        id: 15,
        text: "你现在的经济状况是否有负债？（房贷 / 车贷 / 网贷）",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "压力很大（入不敷出）", 1.0),
            opt("B", "有负债但能覆盖（有压力）", 0.6),
            opt("C", "无负债但存款少", 0.3),
            opt("D", "无负债且有存款（财务自由）", 0.0),
        ],
    },
    Question {
        id: 16,
        text: "春节期间，你需要时刻保持 \"伪装\" 吗？（如假装开心 / 假装成功）",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "是的，全程演戏（很累）", 1.0),
            opt("B", "大部分时间需要", 0.6),
            opt("C", "偶尔需要（特定场合）", 0.3),
            opt("D", "不需要，做自己", 0.0),
        ],
    },
    Question {
        id: 17,
        text: "你对即将到来的春节，现在的心情是？",
        dimension: Dimension::Internal,
        options: &[
            opt("A", "恐惧、抗拒（不想回）", 1.0),
            opt("B", "焦虑、忐忑（既想回又怕回）", 0.6),
            opt("C", "平淡、麻木（例行公事）", 0.3),
            opt("D", "期待、兴奋（终于放假）", 0.0),
        ],
    },
    // DEFENSE, questions 18-25
    Question {
        id: 18,
        text: "当亲戚问你 \"为什么还不结婚\"，你会？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "沉默不语，低头吃菜（冷处理）", 1.0),
            opt("B", "转移话题，问对方问题（反客为主）", 0.3),
            opt("C", "编造理由，糊弄过去（如 \"快了快了\"）", 0.6),
            opt("D", "直接回怼，表明态度（如 \"关你屁事\"）", 0.0),
        ],
    },
    Question {
        id: 19,
        text: "春节期间，你的 \"避难所\" 是？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "没有（无处可逃，必须在场）", 1.0),
            opt("B", "房间（但会被频繁叫出来）", 0.6),
            opt("C", "朋友家 / 酒店（偶尔能躲）", 0.3),
            opt("D", "手机 / 厕所（随时能躲）", 0.0),
        ],
    },
    Question {
        id: 20,
        text: "你会为了避免被问，特意准备 \"装备\" 吗？（如假戒指、租男友）",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "想过但没敢 / 没钱", 1.0),
            opt("B", "准备了一些（如穿得低调 / 高调）", 0.6),
            opt("C", "准备了话术（背好了标准答案）", 0.3),
            opt("D", "不需要准备，兵来将挡", 0.0),
        ],
    },
    Question {
        id: 21,
        text: "面对酒局 / 劝酒，你会？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "被迫喝（不喝不给面子）", 1.0),
            opt("B", "少量喝（意思一下）", 0.6),
            opt("C", "找借口不喝（如开车 / 吃药）", 0.3),
            opt("D", "直接拒绝（我不喝就不喝）", 0.0),
        ],
    },
    Question {
        id: 22,
        text: "如果压力太大，你会如何发泄？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "憋在心里（内伤）", 1.0),
            opt("B", "和陌生人 / 网友吐槽", 0.6),
            opt("C", "和父母 / 朋友吵架", 0.3),
            opt("D", "打游戏 / 吃美食 / 购物（有效解压）", 0.0),
        ],
    },
    Question {
        id: 23,
        text: "你打算在家待多久？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "7 天以上（持久战）", 1.0),
            opt("B", "3-7 天（常规战）", 0.6),
            opt("C", "1-2 天（闪电战）", 0.3),
            opt("D", "不超过 24 小时（当天回）", 0.0),
        ],
    },
    Question {
        id: 24,
        text: "你是否掌握了 \"糊弄学\" 精髓？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "完全不会（容易被绕进去）", 1.0),
            opt("B", "略懂皮毛（经常接不上话）", 0.6),
            opt("C", "熟练掌握（万能回复机器）", 0.3),
            opt("D", "我是糊弄学大师（反向 PUA）", 0.0),
        ],
    },
    Question {
        id: 25,
        text: "今年春节，你最大的底气来源是？",
        dimension: Dimension::Defense,
        options: &[
            opt("A", "没有底气（全是软肋）", 1.0),
            opt("B", "朋友的支持（精神支柱）", 0.6),
            opt("C", "工作 / 金钱（经济独立）", 0.3),
            opt("D", "自我认同（我就是我，不一样的烟火）", 0.0),
        ],
    },
];
