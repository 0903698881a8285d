//! Avatar ID to display name mapping.
//!
//! Covers the commonly seen roster; unknown IDs fall back to a labeled
//! placeholder so new characters degrade gracefully until the table is
//! extended.

/// Display name for an avatar ID, if known.
#[must_use]
pub fn character_name(avatar_id: u64) -> Option<&'static str> {
    let name = match avatar_id {
        10000002 => "Kamisato Ayaka",
        10000003 => "Jean",
        10000006 => "Lisa",
        10000014 => "Barbara",
        10000015 => "Kaeya",
        10000016 => "Diluc",
        10000020 => "Razor",
        10000021 => "Amber",
        10000022 => "Venti",
        10000023 => "Xiangling",
        10000024 => "Beidou",
        10000025 => "Xingqiu",
        10000026 => "Xiao",
        10000027 => "Ningguang",
        10000029 => "Klee",
        10000030 => "Zhongli",
        10000031 => "Fischl",
        10000032 => "Bennett",
        10000033 => "Tartaglia",
        10000034 => "Noelle",
        10000035 => "Qiqi",
        10000036 => "Chongyun",
        10000037 => "Ganyu",
        10000038 => "Albedo",
        10000039 => "Diona",
        10000041 => "Mona",
        10000042 => "Keqing",
        10000043 => "Sucrose",
        10000044 => "Xinyan",
        10000045 => "Rosaria",
        10000046 => "Hu Tao",
        10000047 => "Kaedehara Kazuha",
        10000048 => "Yanfei",
        10000049 => "Yoimiya",
        10000051 => "Eula",
        10000052 => "Raiden Shogun",
        10000053 => "Sayu",
        10000054 => "Sangonomiya Kokomi",
        10000055 => "Gorou",
        10000056 => "Kujou Sara",
        10000057 => "Arataki Itto",
        10000058 => "Yae Miko",
        10000060 => "Yelan",
        10000062 => "Aloy",
        10000063 => "Shenhe",
        10000064 => "Yun Jin",
        10000066 => "Kamisato Ayato",
        10000069 => "Tighnari",
        10000070 => "Nilou",
        10000071 => "Cyno",
        10000073 => "Nahida",
        10000078 => "Alhaitham",
        10000087 => "Neuvillette",
        10000089 => "Furina",
        _ => return None,
    };
    Some(name)
}

/// Display name with a placeholder for unmapped IDs.
#[must_use]
pub fn character_name_or_id(avatar_id: u64) -> String {
    character_name(avatar_id)
        .map_or_else(|| format!("Character {avatar_id}"), ToString::to_string)
}
