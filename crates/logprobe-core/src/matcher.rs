//! 关键字定位（Aho-Corasick，一次遍历收集全部关键字的命中）
//!
//! 要点：
//! - 使用 overlapping 遍历，同一关键字的重叠命中也会被收集；
//!   这正好等价于“从上一个命中起点 +1 继续查找”的逐次定位序列。
//! - 计数口径为非重叠（左起优先），与 `str::matches` 一致，由命中序列贪心得到。
use anyhow::{bail, Result};
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

/// 关键字自动机（模式索引与构建时的关键字顺序一一对应）
pub(crate) struct KeywordMatcher {
    ac: AhoCorasick,
    lens: Vec<usize>,
}

impl KeywordMatcher {
    pub(crate) fn new(keywords: &[&str]) -> Result<Self> {
        if let Some(i) = keywords.iter().position(|k| k.is_empty()) {
            bail!("keyword #{i} is empty");
        }
        // overlapping 遍历只支持 Standard 语义
        let ac = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(keywords)?;
        let lens = keywords.iter().map(|k| k.len()).collect();
        Ok(Self { ac, lens })
    }

    /// 每个关键字的全部命中起点（字节偏移，含重叠，升序）
    pub(crate) fn hit_offsets(&self, text: &str) -> Vec<Vec<usize>> {
        let mut hits: Vec<Vec<usize>> = vec![Vec::new(); self.lens.len()];
        for m in self.ac.find_overlapping_iter(text) {
            hits[m.pattern().as_usize()].push(m.start());
        }
        // overlapping 结果按结束位置输出；同一模式长度固定，这里再保证一次
        for h in hits.iter_mut() {
            h.sort_unstable();
        }
        hits
    }

    /// 指定关键字的字节长度
    pub(crate) fn keyword_len(&self, idx: usize) -> usize {
        self.lens[idx]
    }
}

/// 从升序命中起点中贪心挑选互不重叠的命中，返回数量
pub(crate) fn count_non_overlapping(starts: &[usize], keyword_len: usize) -> usize {
    let mut count = 0;
    let mut next_free = 0usize;
    for &s in starts {
        if s >= next_free {
            count += 1;
            next_free = s + keyword_len;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_overlapping_hits_per_keyword() {
        let m = KeywordMatcher::new(&["aa", "b"]).unwrap();
        let hits = m.hit_offsets("aaaba");
        assert_eq!(hits[0], vec![0, 1]);
        assert_eq!(hits[1], vec![3]);
    }

    #[test]
    fn count_matches_str_semantics() {
        let m = KeywordMatcher::new(&["aa"]).unwrap();
        let text = "aaaaa";
        let hits = m.hit_offsets(text);
        assert_eq!(hits[0], vec![0, 1, 2, 3]);
        assert_eq!(count_non_overlapping(&hits[0], m.keyword_len(0)), text.matches("aa").count());
    }

    #[test]
    fn keyword_nested_in_another_is_still_found() {
        let m = KeywordMatcher::new(&["CoreCompile", "Compile"]).unwrap();
        let hits = m.hit_offsets("x CoreCompile y");
        assert_eq!(hits[0], vec![2]);
        assert_eq!(hits[1], vec![6]);
    }

    #[test]
    fn non_ascii_keywords_report_byte_offsets() {
        let m = KeywordMatcher::new(&["오류"]).unwrap();
        let hits = m.hit_offsets("a 오류");
        assert_eq!(hits[0], vec![2]);
    }

    #[test]
    fn empty_keyword_is_rejected() {
        assert!(KeywordMatcher::new(&["error", ""]).is_err());
    }
}
