// ============================================================
// Layer 3 — Dataset Card
// ============================================================
// Static metadata describing the corpus as a whole: the prose
// description, homepage, license and citation texts, plus the
// declared schema of every record the enumerator yields.
//
// This is the information a consumer reads before deciding to
// load the data at all; none of it touches the filesystem.

use serde::Serialize;

use crate::domain::record::SAMPLING_RATE;

const DESCRIPTION: &str = "\
TITML-IDN (Tokyo Institute of Technology Multilingual - Indonesian) is collected to build \
a pioneering Indonesian Large Vocabulary Continuous Speech Recognition (LVCSR) System. In \
order to build an LVCSR system, high accurate acoustic models and large-scale language \
models are essential. Since Indonesian speech corpus was not available yet, we tried to \
collect speech data from 20 Indonesian native speakers (11 males and 9 females) to \
construct a speech corpus for training the acoustic model based on Hidden Markov Models \
(HMMs). A text corpus which was collected by ILPS, Informatics Institute, University of \
Amsterdam, was used to build a 40K-vocabulary dictionary and a n-gram language model.";

const HOMEPAGE: &str = "http://research.nii.ac.jp/src/en/TITML-IDN.html";

const LICENSE: &str =
    "For research purposes only. If you use this corpus, you have to cite (Lestari et al, 2006).";

const CITATION: &str = "\
@inproceedings{lestari2006titmlidn,
  title={A large vocabulary continuous speech recognition system for Indonesian language},
  author={Lestari, Dessi Puji and Iwano, Koji and Furui, Sadaoki},
  booktitle={15th Indonesian Scientific Conference in Japan Proceedings},
  pages={17--22},
  year={2006}
}";

/// Value type of one declared record field.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureKind {
    /// UTF-8 text value
    Text,
    /// Raw audio content plus path, with a declared sampling rate
    Audio { sampling_rate: u32 },
}

/// One field in the record schema.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: &'static str,
    pub kind: FeatureKind,
}

/// The single split this adapter exposes.
///
/// The corpus ships unpartitioned; the full record sequence is
/// published as one "train" split and any further partitioning
/// is left to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    Train,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
        }
    }
}

/// The complete dataset card.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub description: &'static str,
    pub homepage:    &'static str,
    pub license:     &'static str,
    pub citation:    &'static str,
    pub features:    Vec<Feature>,
    pub splits:      Vec<Split>,
}

impl DatasetInfo {
    /// Build the card for this corpus.
    /// Field order matches the order fields appear in each record.
    pub fn new() -> Self {
        Self {
            description: DESCRIPTION,
            homepage:    HOMEPAGE,
            license:     LICENSE,
            citation:    CITATION,
            features: vec![
                Feature { name: "speaker_id", kind: FeatureKind::Text },
                Feature { name: "path",       kind: FeatureKind::Text },
                Feature { name: "sentence",   kind: FeatureKind::Text },
                Feature {
                    name: "audio",
                    kind: FeatureKind::Audio { sampling_rate: SAMPLING_RATE },
                },
            ],
            splits: vec![Split::Train],
        }
    }
}

impl Default for DatasetInfo {
    fn default() -> Self {
        Self::new()
    }
}
