//! Classement des libellés de filtre en catégories.
//!
//! Les règles sont évaluées dans l'ordre et la première qui correspond gagne.
//! Les ensembles explicites passent avant les suffixes : « 合单 » finit par
//! « 合 » mais doit rester dans `SumOddEven`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    OddEven,
    BigSmall,
    Wave,
    PoultryBeast,
    SumOddEven,
    SumBigSmall,
    BigSmallOddEven,
    TailBigSmall,
    FiveElements,
    ColorOddEven,
    Zodiac,
    TailExact,
    Head,
    Men,
    Duan,
    HeShu,
    SkyEarth,
    YinYang,
    LeftRight,
    FrontBack,
    SingleMulti,
    Other,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::OddEven => "oddEven",
            Category::BigSmall => "bigSmall",
            Category::Wave => "wave",
            Category::PoultryBeast => "poultryBeast",
            Category::SumOddEven => "sumOddEven",
            Category::SumBigSmall => "sumBigSmall",
            Category::BigSmallOddEven => "bigSmallOddEven",
            Category::TailBigSmall => "tailBigSmall",
            Category::FiveElements => "fiveElements",
            Category::ColorOddEven => "colorOddEven",
            Category::Zodiac => "zodiac",
            Category::TailExact => "tailExact",
            Category::Head => "head",
            Category::Men => "men",
            Category::Duan => "duan",
            Category::HeShu => "heShu",
            Category::SkyEarth => "skyEarth",
            Category::YinYang => "yinYang",
            Category::LeftRight => "leftRight",
            Category::FrontBack => "frontBack",
            Category::SingleMulti => "singleMulti",
            Category::Other => "other",
        }
    }

    /// Titre affiché au-dessus du groupe de libellés.
    pub fn title(&self) -> &'static str {
        match self {
            Category::OddEven => "单双",
            Category::BigSmall => "大小",
            Category::Wave => "波色",
            Category::PoultryBeast => "家禽野兽",
            Category::SumOddEven => "合数单双",
            Category::SumBigSmall => "合数大小",
            Category::BigSmallOddEven => "大小单双",
            Category::TailBigSmall => "尾数大小",
            Category::FiveElements => "五行",
            Category::ColorOddEven => "波色单双",
            Category::Zodiac => "生肖",
            Category::TailExact => "尾数",
            Category::Head => "头数",
            Category::Men => "门数",
            Category::Duan => "段数",
            Category::HeShu => "合数",
            Category::SkyEarth => "天地肖",
            Category::YinYang => "阴阳肖",
            Category::LeftRight => "左右肖",
            Category::FrontBack => "前后肖",
            Category::SingleMulti => "独合字肖",
            Category::Other => "其他",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub enum ClassRule {
    OneOf(&'static [&'static str], Category),
    Suffix {
        suffix: &'static str,
        except: &'static [&'static str],
        category: Category,
    },
}

impl ClassRule {
    fn category_for(&self, token: &str) -> Option<Category> {
        match self {
            ClassRule::OneOf(members, category) => {
                members.contains(&token).then_some(*category)
            }
            ClassRule::Suffix { suffix, except, category } => {
                (token.ends_with(suffix) && !except.contains(&token)).then_some(*category)
            }
        }
    }
}

pub const CLASSIFICATION_RULES: &[ClassRule] = &[
    ClassRule::OneOf(&["单", "双"], Category::OddEven),
    ClassRule::OneOf(&["大", "小"], Category::BigSmall),
    ClassRule::OneOf(&["红波", "绿波", "蓝波"], Category::Wave),
    ClassRule::OneOf(&["家禽", "野兽"], Category::PoultryBeast),
    ClassRule::OneOf(&["合单", "合双"], Category::SumOddEven),
    ClassRule::OneOf(&["合大", "合小"], Category::SumBigSmall),
    ClassRule::OneOf(&["大单", "小单", "大双", "小双"], Category::BigSmallOddEven),
    ClassRule::OneOf(&["尾大", "尾小"], Category::TailBigSmall),
    ClassRule::OneOf(&["金", "木", "水", "火", "土"], Category::FiveElements),
    ClassRule::OneOf(
        &["红单", "红双", "绿单", "绿双", "蓝单", "蓝双"],
        Category::ColorOddEven,
    ),
    ClassRule::OneOf(
        &["鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪"],
        Category::Zodiac,
    ),
    ClassRule::Suffix { suffix: "尾", except: &["大尾", "小尾"], category: Category::TailExact },
    ClassRule::Suffix { suffix: "头", except: &[], category: Category::Head },
    ClassRule::Suffix { suffix: "门", except: &[], category: Category::Men },
    ClassRule::Suffix { suffix: "段", except: &[], category: Category::Duan },
    ClassRule::Suffix { suffix: "合", except: &[], category: Category::HeShu },
    ClassRule::OneOf(&["天肖", "地肖"], Category::SkyEarth),
    ClassRule::OneOf(&["阴肖", "阳肖"], Category::YinYang),
    ClassRule::OneOf(&["左肖", "右肖"], Category::LeftRight),
    ClassRule::OneOf(&["前肖", "后肖"], Category::FrontBack),
    ClassRule::OneOf(&["独字肖", "合字肖"], Category::SingleMulti),
];

pub fn classify(token: &str) -> Category {
    CLASSIFICATION_RULES
        .iter()
        .find_map(|rule| rule.category_for(token))
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_explicit_sets() {
        assert_eq!(classify("单"), Category::OddEven);
        assert_eq!(classify("小"), Category::BigSmall);
        assert_eq!(classify("蓝波"), Category::Wave);
        assert_eq!(classify("野兽"), Category::PoultryBeast);
        assert_eq!(classify("大双"), Category::BigSmallOddEven);
        assert_eq!(classify("尾小"), Category::TailBigSmall);
        assert_eq!(classify("土"), Category::FiveElements);
        assert_eq!(classify("绿单"), Category::ColorOddEven);
        assert_eq!(classify("猪"), Category::Zodiac);
        assert_eq!(classify("地肖"), Category::SkyEarth);
        assert_eq!(classify("阳肖"), Category::YinYang);
        assert_eq!(classify("左肖"), Category::LeftRight);
        assert_eq!(classify("后肖"), Category::FrontBack);
        assert_eq!(classify("独字肖"), Category::SingleMulti);
    }

    #[test]
    fn test_classify_suffixes() {
        assert_eq!(classify("7尾"), Category::TailExact);
        assert_eq!(classify("4头"), Category::Head);
        assert_eq!(classify("5门"), Category::Men);
        assert_eq!(classify("7段"), Category::Duan);
        assert_eq!(classify("13合"), Category::HeShu);
    }

    #[test]
    fn test_sum_tokens_not_shadowed_by_he_suffix() {
        assert_eq!(classify("合单"), Category::SumOddEven);
        assert_eq!(classify("合双"), Category::SumOddEven);
        assert_eq!(classify("合大"), Category::SumBigSmall);
        assert_eq!(classify("合小"), Category::SumBigSmall);
        // « 合字肖 » contient 合 mais ne finit pas par 合.
        assert_eq!(classify("合字肖"), Category::SingleMulti);
    }

    #[test]
    fn test_guarded_tail_tokens() {
        assert_eq!(classify("大尾"), Category::Other);
        assert_eq!(classify("小尾"), Category::Other);
        assert_eq!(classify("尾大"), Category::TailBigSmall);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("紫波"), Category::Other);
        // Inconnu mais classé par suffixe.
        assert_eq!(classify("99尾"), Category::TailExact);
    }
}
