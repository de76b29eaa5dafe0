//! Static lookup tables for the query interpreter.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Subject keywords (English and Japanese) and the arXiv category each implies.
///
/// Order matters: matched codes are emitted in table order, and several
/// keywords may map to the same code.
pub const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("machine learning", "cs.LG"),
    ("機械学習", "cs.LG"),
    ("artificial intelligence", "cs.AI"),
    ("人工知能", "cs.AI"),
    ("computer vision", "cs.CV"),
    ("コンピュータビジョン", "cs.CV"),
    ("画像認識", "cs.CV"),
    ("natural language processing", "cs.CL"),
    ("自然言語処理", "cs.CL"),
    ("nlp", "cs.CL"),
    ("deep learning", "cs.LG"),
    ("深層学習", "cs.LG"),
    ("ディープラーニング", "cs.LG"),
    ("neural networks", "cs.NE"),
    ("ニューラルネットワーク", "cs.NE"),
    ("神経回路網", "cs.NE"),
    ("physics", "physics"),
    ("物理学", "physics"),
    ("物理", "physics"),
    ("mathematics", "math"),
    ("数学", "math"),
    ("quantum", "quant-ph"),
    ("量子", "quant-ph"),
    ("量子コンピューティング", "quant-ph"),
    ("量子計算", "quant-ph"),
    ("biology", "q-bio"),
    ("生物学", "q-bio"),
    ("chemistry", "physics.chem-ph"),
    ("化学", "physics.chem-ph"),
    ("astronomy", "astro-ph"),
    ("天文学", "astro-ph"),
    ("cryptography", "cs.CR"),
    ("暗号", "cs.CR"),
    ("robotics", "cs.RO"),
    ("ロボティクス", "cs.RO"),
    ("ロボット", "cs.RO"),
    ("databases", "cs.DB"),
    ("データベース", "cs.DB"),
    ("algorithms", "cs.DS"),
    ("アルゴリズム", "cs.DS"),
    ("graphics", "cs.GR"),
    ("グラフィックス", "cs.GR"),
    ("hci", "cs.HC"),
    ("human computer interaction", "cs.HC"),
    ("ヒューマンコンピュータインタラクション", "cs.HC"),
    ("information theory", "cs.IT"),
    ("情報理論", "cs.IT"),
    ("networking", "cs.NI"),
    ("ネットワーク", "cs.NI"),
    ("operating systems", "cs.OS"),
    ("オペレーティングシステム", "cs.OS"),
    ("programming languages", "cs.PL"),
    ("プログラミング言語", "cs.PL"),
    ("software engineering", "cs.SE"),
    ("ソフトウェア工学", "cs.SE"),
    ("systems", "cs.SY"),
    ("システム", "cs.SY"),
];

/// Function words and search verbs that never become search terms.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "papers", "paper", "research", "about", "on", "in", "the", "a", "an", "and", "or", "but",
        "for", "with", "to", "of", "at", "by", "from", "find", "search", "look", "get", "show",
        "give", "me", "i", "want", "need", "related", "regarding", "concerning", "involving",
        "論文", "研究", "について", "に関する", "の", "が", "を", "で", "は", "も", "探す", "検索",
        "見つける", "取得", "表示", "欲しい", "必要", "関連", "する",
    ]
    .into_iter()
    .collect()
});

/// Non-ASCII stop words, longest first.
///
/// Japanese text is not whitespace-delimited, so these are cut out as
/// substrings before tokenizing.
pub static UNSPACED_STOP_WORDS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut words: Vec<&'static str> =
        STOP_WORDS.iter().copied().filter(|w| !w.is_ascii()).collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words
});
