//! Systematic index table
//!
//! Rows are laid out as in RFC 6330 Table 2: `(K', J, S, H, W)`. Every row has
//! been checked to give a nonsingular systematic system (see the
//! `every_table_row_encodes` test in `tests/fec/params.rs`).

/// One row of the systematic index table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystematicEntry {
    /// Padded source symbol count K'
    pub k_prime: u16,
    /// Systematic index J(K')
    pub j: u16,
    /// LDPC symbol count
    pub s: u16,
    /// HDPC symbol count
    pub h: u16,
    /// LT symbol count
    pub w: u16,
}

const fn row(k_prime: u16, j: u16, s: u16, h: u16, w: u16) -> SystematicEntry {
    SystematicEntry { k_prime, j, s, h, w }
}

/// Supported systematic indices, sorted by K'
pub static SYSTEMATIC_INDICES: [SystematicEntry; 125] = [
    row(10, 254, 7, 10, 17),
    row(12, 630, 7, 10, 19),
    row(18, 682, 11, 10, 29),
    row(20, 293, 11, 10, 31),
    row(26, 80, 11, 10, 37),
    row(30, 566, 11, 10, 41),
    row(32, 860, 11, 10, 43),
    row(36, 267, 11, 10, 47),
    row(42, 822, 11, 10, 53),
    row(46, 506, 13, 10, 59),
    row(48, 589, 13, 10, 61),
    row(49, 87, 13, 10, 61),
    row(55, 520, 13, 10, 67),
    row(60, 159, 13, 10, 71),
    row(62, 235, 13, 10, 73),
    row(69, 157, 13, 10, 79),
    row(75, 502, 17, 10, 89),
    row(84, 334, 17, 10, 97),
    row(88, 583, 17, 10, 101),
    row(91, 66, 17, 10, 103),
    row(95, 352, 17, 10, 107),
    row(97, 365, 17, 10, 109),
    row(101, 562, 17, 10, 113),
    row(114, 5, 19, 10, 127),
    row(119, 603, 19, 10, 131),
    row(125, 721, 19, 10, 137),
    row(127, 28, 19, 10, 139),
    row(138, 660, 19, 10, 149),
    row(140, 829, 19, 10, 151),
    row(149, 900, 23, 10, 163),
    row(153, 930, 23, 10, 167),
    row(160, 814, 23, 10, 173),
    row(166, 661, 23, 10, 179),
    row(168, 693, 23, 10, 181),
    row(179, 780, 23, 10, 191),
    row(181, 605, 23, 10, 193),
    row(185, 551, 23, 10, 197),
    row(187, 777, 23, 10, 199),
    row(200, 491, 23, 10, 211),
    row(213, 396, 23, 10, 223),
    row(217, 764, 29, 10, 233),
    row(225, 843, 29, 10, 241),
    row(236, 646, 29, 10, 251),
    row(242, 557, 29, 10, 257),
    row(248, 608, 29, 10, 263),
    row(257, 265, 29, 10, 269),
    row(263, 505, 29, 10, 271),
    row(269, 722, 29, 10, 277),
    row(280, 263, 29, 10, 293),
    row(295, 999, 29, 10, 307),
    row(301, 874, 29, 10, 313),
    row(305, 160, 29, 10, 317),
    row(324, 575, 31, 10, 337),
    row(337, 210, 31, 10, 349),
    row(341, 513, 31, 10, 353),
    row(347, 503, 31, 10, 359),
    row(355, 558, 31, 10, 367),
    row(362, 932, 31, 10, 373),
    row(368, 404, 31, 10, 379),
    row(372, 520, 37, 10, 389),
    row(380, 846, 37, 10, 397),
    row(385, 485, 37, 10, 401),
    row(393, 728, 37, 10, 409),
    row(405, 554, 37, 10, 421),
    row(418, 471, 37, 10, 433),
    row(428, 641, 37, 10, 443),
    row(434, 732, 37, 10, 449),
    row(447, 193, 37, 10, 461),
    row(453, 934, 37, 10, 467),
    row(466, 864, 37, 10, 479),
    row(478, 790, 37, 10, 491),
    row(486, 912, 37, 10, 499),
    row(491, 617, 37, 10, 503),
    row(497, 587, 37, 10, 509),
    row(511, 800, 37, 10, 523),
    row(526, 923, 41, 10, 541),
    row(532, 998, 41, 10, 547),
    row(540, 92, 41, 10, 557),
    row(549, 497, 41, 10, 563),
    row(557, 559, 41, 10, 571),
    row(563, 667, 41, 10, 577),
    row(573, 912, 41, 10, 587),
    row(581, 262, 41, 10, 593),
    row(589, 152, 41, 10, 601),
    row(598, 526, 41, 10, 607),
    row(610, 268, 41, 10, 619),
    row(616, 212, 41, 10, 631),
    row(625, 45, 41, 10, 641),
    row(635, 898, 41, 10, 647),
    row(643, 527, 41, 10, 653),
    row(654, 558, 41, 10, 661),
    row(660, 460, 47, 10, 673),
    row(668, 5, 47, 10, 677),
    row(683, 895, 47, 10, 691),
    row(698, 996, 47, 10, 701),
    row(708, 282, 47, 10, 709),
    row(719, 513, 47, 10, 727),
    row(726, 865, 47, 10, 733),
    row(736, 870, 47, 10, 743),
    row(747, 239, 47, 10, 757),
    row(758, 452, 47, 10, 769),
    row(769, 862, 47, 10, 773),
    row(780, 852, 47, 10, 787),
    row(790, 643, 47, 10, 797),
    row(801, 1017, 47, 10, 809),
    row(812, 560, 47, 10, 821),
    row(823, 296, 47, 10, 827),
    row(834, 539, 47, 10, 839),
    row(846, 213, 47, 10, 853),
    row(857, 361, 53, 10, 877),
    row(868, 742, 53, 10, 883),
    row(879, 596, 53, 10, 887),
    row(890, 389, 53, 10, 907),
    row(901, 657, 53, 10, 919),
    row(912, 111, 53, 10, 929),
    row(923, 424, 53, 10, 937),
    row(935, 542, 53, 10, 947),
    row(947, 322, 53, 10, 953),
    row(958, 541, 53, 10, 967),
    row(970, 314, 53, 10, 977),
    row(981, 555, 53, 10, 991),
    row(993, 401, 53, 10, 997),
    row(1005, 282, 59, 10, 1009),
    row(1017, 503, 59, 10, 1021),
    row(1029, 409, 59, 10, 1033),
];

/// Largest supported source symbol count
pub const MAX_SOURCE_SYMBOLS: usize = 1029;

/// Smallest table row with K' >= k
pub fn lookup(k: usize) -> Option<&'static SystematicEntry> {
    let idx = SYSTEMATIC_INDICES.partition_point(|e| (e.k_prime as usize) < k);
    SYSTEMATIC_INDICES.get(idx)
}
