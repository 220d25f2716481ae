//! Tables de répartition des douze signes utilisées par l'enrichissement.
//!
//! Chaque table partitionne les signes en groupes nommés. L'ordre de
//! déclaration compte : le premier groupe qui contient le signe l'emporte.

use crate::models::ZodiacSign::{self, *};
use crate::models::NumberRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacAttribute {
    PoultryBeast,
    Luckiness,
    YinYang,
    Stroke,
    SkyEarth,
    ZiBianHuaZhong,
    Gender,
    ThreeHarmony,
    SixHarmony,
    FourArts,
    ZodiacColor,
    Season,
}

impl ZodiacAttribute {
    /// Nom du champ dans le fichier JSON.
    pub fn field(&self) -> &'static str {
        match self {
            ZodiacAttribute::PoultryBeast => "poultryBeast",
            ZodiacAttribute::Luckiness => "luckiness",
            ZodiacAttribute::YinYang => "yinYang",
            ZodiacAttribute::Stroke => "stroke",
            ZodiacAttribute::SkyEarth => "skyEarth",
            ZodiacAttribute::ZiBianHuaZhong => "ziBianHuaZhong",
            ZodiacAttribute::Gender => "gender",
            ZodiacAttribute::ThreeHarmony => "threeHarmony",
            ZodiacAttribute::SixHarmony => "sixHarmony",
            ZodiacAttribute::FourArts => "fourArts",
            ZodiacAttribute::ZodiacColor => "zodiacColor",
            ZodiacAttribute::Season => "season",
        }
    }

    pub fn slot<'a>(&self, record: &'a mut NumberRecord) -> &'a mut Option<String> {
        match self {
            ZodiacAttribute::PoultryBeast => &mut record.poultry_beast,
            ZodiacAttribute::Luckiness => &mut record.luckiness,
            ZodiacAttribute::YinYang => &mut record.yin_yang,
            ZodiacAttribute::Stroke => &mut record.stroke,
            ZodiacAttribute::SkyEarth => &mut record.sky_earth,
            ZodiacAttribute::ZiBianHuaZhong => &mut record.zi_bian_hua_zhong,
            ZodiacAttribute::Gender => &mut record.gender,
            ZodiacAttribute::ThreeHarmony => &mut record.three_harmony,
            ZodiacAttribute::SixHarmony => &mut record.six_harmony,
            ZodiacAttribute::FourArts => &mut record.four_arts,
            ZodiacAttribute::ZodiacColor => &mut record.zodiac_color,
            ZodiacAttribute::Season => &mut record.season,
        }
    }
}

pub struct AttributeTable {
    pub attribute: ZodiacAttribute,
    pub buckets: &'static [(&'static str, &'static [ZodiacSign])],
}

impl AttributeTable {
    pub fn bucket_of(&self, sign: ZodiacSign) -> Option<&'static str> {
        self.buckets
            .iter()
            .find(|(_, members)| members.contains(&sign))
            .map(|(name, _)| *name)
    }
}

pub const ATTRIBUTE_TABLES: &[AttributeTable] = &[
    AttributeTable {
        attribute: ZodiacAttribute::PoultryBeast,
        buckets: &[
            ("家禽", &[Ox, Horse, Goat, Rooster, Dog, Pig]),
            ("野兽", &[Rat, Tiger, Rabbit, Dragon, Snake, Monkey]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::Luckiness,
        buckets: &[
            ("吉美", &[Rabbit, Dragon, Snake, Horse, Goat, Rooster]),
            ("凶丑", &[Rat, Ox, Tiger, Monkey, Dog, Pig]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::YinYang,
        buckets: &[
            ("阴性", &[Rat, Dragon, Snake, Horse, Dog, Pig]),
            ("阳性", &[Ox, Tiger, Rabbit, Goat, Monkey, Rooster]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::Stroke,
        buckets: &[
            ("单笔", &[Rat, Dragon, Horse, Snake, Rooster, Pig]),
            ("双笔", &[Tiger, Monkey, Dog, Rabbit, Goat, Ox]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::SkyEarth,
        buckets: &[
            ("天肖", &[Rabbit, Horse, Monkey, Pig, Ox, Dragon]),
            ("地肖", &[Snake, Goat, Rooster, Dog, Rat, Tiger]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::ZiBianHuaZhong,
        buckets: &[
            ("自边", &[Rat, Ox, Tiger, Rooster, Dog, Pig]),
            ("画中", &[Rabbit, Dragon, Snake, Horse, Goat, Monkey]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::Gender,
        buckets: &[
            ("女肖", &[Rabbit, Snake, Goat, Rooster, Pig]),
            ("男肖", &[Rat, Ox, Tiger, Dragon, Horse, Monkey, Dog]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::ThreeHarmony,
        buckets: &[
            ("鼠龙猴", &[Rat, Dragon, Monkey]),
            ("牛蛇鸡", &[Ox, Snake, Rooster]),
            ("虎马狗", &[Tiger, Horse, Dog]),
            ("兔羊猪", &[Rabbit, Goat, Pig]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::SixHarmony,
        buckets: &[
            ("鼠牛", &[Rat, Ox]),
            ("龙鸡", &[Dragon, Rooster]),
            ("虎猪", &[Tiger, Pig]),
            ("蛇猴", &[Snake, Monkey]),
            ("兔狗", &[Rabbit, Dog]),
            ("马羊", &[Horse, Goat]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::FourArts,
        buckets: &[
            ("琴", &[Rabbit, Snake, Rooster]),
            ("棋", &[Rat, Ox, Dog]),
            ("书", &[Tiger, Dragon, Horse]),
            ("画", &[Goat, Monkey, Pig]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::ZodiacColor,
        buckets: &[
            ("红肖", &[Horse, Rabbit, Rat, Rooster]),
            ("蓝肖", &[Snake, Tiger, Pig, Monkey]),
            ("绿肖", &[Goat, Dragon, Ox, Dog]),
        ],
    },
    AttributeTable {
        attribute: ZodiacAttribute::Season,
        buckets: &[
            ("春天", &[Rabbit, Tiger, Dragon]),
            ("夏天", &[Horse, Snake, Goat]),
            ("秋天", &[Rooster, Monkey, Dog]),
            ("冬天", &[Rat, Pig, Ox]),
        ],
    },
];

pub const DIRECTIONS: &[(&str, &str)] = &[
    ("春天", "东方"),
    ("夏天", "南方"),
    ("秋天", "西方"),
    ("冬天", "北方"),
];

pub const FIVE_FU: &[ZodiacSign] = &[Rat, Tiger, Rabbit, Snake, Monkey, Dragon];

pub fn direction_of(season: &str) -> Option<&'static str> {
    DIRECTIONS
        .iter()
        .find(|(s, _)| *s == season)
        .map(|(_, d)| *d)
}
