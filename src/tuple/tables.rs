//! Pseudo-random lookup tables V0..V3 (RFC 6330 section 5.5)
//!
//! Pure constant data consumed by [`super::rand`].

pub(super) static V0: [u32; 256] = [
    0x0efa6600, 0xeb9244cf, 0xc8ecbf24, 0xf299d580, 0x075e7787, 0xc7bde28b,
    0xbfd91ac9, 0x77e739b3, 0x2e2b81d2, 0x8f37e545, 0x3bdd6c52, 0x6de86ab1,
    0x19905bfc, 0xdf4c7d50, 0x5ed8ab98, 0xb6cef53b, 0x556fc6bf, 0x1e0a837a,
    0x7927e60d, 0xcbceade8, 0xa73b5fe6, 0xb8eb6e7a, 0xe303b5b2, 0x951b1cfb,
    0xed29dfa5, 0x0eaa552d, 0xef6d013b, 0x26ba4cf8, 0x75b7eaf4, 0x9e073a26,
    0x8c8b90c1, 0x291a89f8, 0x2aaa59c4, 0xa249a806, 0x0b70c274, 0xd2bbc193,
    0xc35359b1, 0x57a51265, 0xe04c6006, 0xc0aaa81f, 0x0750456b, 0xe9b376d5,
    0x2ea02423, 0x162e1ede, 0xb28d4b75, 0x79eee20f, 0x8b0e2d36, 0xeebd13a7,
    0x0d0783fb, 0xcb9297cf, 0xfacb1386, 0x33539ce7, 0xdb241635, 0x99e13008,
    0xc56c7940, 0x289ac823, 0x12512172, 0xf51fd484, 0x4507610e, 0x2a45f51a,
    0xa25f1591, 0xfa67b73b, 0xfb4a99f1, 0xf154f3e3, 0xb4b37a05, 0x71ca5552,
    0x1e750349, 0x5129a17a, 0x07b418f3, 0xbb4ce843, 0x992caf33, 0xb4cc002e,
    0x62d4df76, 0x378edc2e, 0x7627587d, 0xb1ce3b13, 0xb3456a22, 0xcd85e740,
    0x28c13142, 0x2e63ddc9, 0x5364f46d, 0x7398f3bc, 0x64dc8e83, 0xe6918fc0,
    0x54c94572, 0x2359e41a, 0x6ffedda9, 0x96942bd5, 0x5eddee8b, 0xed97f506,
    0xec4bc891, 0xa0a2e8ff, 0x73c1556b, 0x194f299f, 0x504cb4c3, 0x9f187344,
    0x911a6412, 0x97718f9b, 0x527f3a90, 0xf5c8d81b, 0x5ad15cca, 0xa1700da1,
    0x3e647591, 0x84e7fcb0, 0x4ad44a34, 0xfb276571, 0x5aadcc9b, 0xb54ed921,
    0x190aaebe, 0x00a2eb63, 0x1ebbc908, 0xce154dee, 0x7e1cdeda, 0xa221cf5e,
    0xc145c8da, 0x32ebbcdc, 0x1963d8e3, 0x136bcebe, 0x6b19c65c, 0x92ca7f5b,
    0x75d1c4da, 0x53f69fb1, 0x493e4590, 0xe97be193, 0x0fbbf6c5, 0x9a994719,
    0x935267c5, 0xffc8dd3f, 0x26ca4fec, 0x4706208b, 0xb596d637, 0x93044483,
    0x97c09e6a, 0x39c45634, 0x785cd138, 0x87301601, 0x45b2ca2c, 0xc1baba09,
    0xec3e34a1, 0x98a205a9, 0x364f8a3c, 0x2d5988a9, 0xd4bf5415, 0xa02c1521,
    0x16c2a3c9, 0x9bcbdb34, 0xa492b852, 0x56d2fdcf, 0x34ad1bdb, 0xc464f8fe,
    0x5fa43b2f, 0x76556626, 0x3c791e2f, 0xa26b9577, 0xb68a5113, 0xb9af997d,
    0x0846bd30, 0xf7faa3cd, 0xc605606a, 0x7b522f12, 0x85f5fe06, 0xdab87fba,
    0x5de2d46f, 0x315abba8, 0xde71d25b, 0xcbf7fad4, 0xc8ecadc1, 0xeed04663,
    0x2069ea7c, 0x4a18728b, 0xea263522, 0xa6620bf5, 0xf34414d8, 0x87ecaf95,
    0x34c96dc9, 0x24be5001, 0xbe1231cc, 0xa5b94466, 0x8b79caef, 0x48075318,
    0x0f663455, 0xe4c2abc0, 0x7bae21aa, 0xbf94835c, 0xc4ed3d9e, 0x348024c4,
    0x50cc71a5, 0x0c5a19fc, 0x904a8670, 0x1564bc68, 0x6069f908, 0xc3093aa6,
    0x6991aae3, 0xa96719fa, 0x686154f8, 0x54b33586, 0x273d1d89, 0x0b9135af,
    0xc13586b5, 0x024d5fec, 0x11fe40c3, 0xf8eaddab, 0x11b8a2a2, 0x7f6c4581,
    0x5995b80d, 0xdab63e6e, 0xde3c0b6c, 0x0dfc8502, 0x83f0b389, 0xa2ff4754,
    0x43562e86, 0xbdfc365f, 0xaa6b9a73, 0xc3c291bb, 0xe3ad693c, 0xd40b8ccd,
    0x1aef0eac, 0x67bf1551, 0xd6265e2d, 0x65e3d309, 0xdcb60ceb, 0xd29aa9a0,
    0x61d9c149, 0x0ab0aaf2, 0x8de3dab0, 0xea9d1840, 0xdba88c0c, 0xbc209638,
    0x6e85bed5, 0xaa912d3b, 0xbd573de2, 0x31c1d8e2, 0x13c00ecf, 0x1edde337,
    0xb36b8834, 0xef2c0ed1, 0x84279aeb, 0xdfee6721, 0xb774c2de, 0x7a7cbcff,
    0xb7ab1739, 0xe82f119c, 0x4403c447, 0x8da2ddbd, 0x9c93494f, 0x9845ace4,
    0x17ea577d, 0x57069802, 0x286abd70, 0x3f7a7811, 0x381524d8, 0x63be022c,
    0x1f861877, 0x66136676, 0xd8589b94, 0x50f620b7,
];

pub(super) static V1: [u32; 256] = [
    0x301fb945, 0x79c6d2c7, 0xc6e2c2e4, 0x4d9c8ee9, 0x87d0cc3b, 0x203f3bec,
    0x6468692e, 0x163717d6, 0xd11baddd, 0x6966d195, 0x4bb98c5c, 0x9b27141e,
    0x7a272b09, 0xe7f26e5b, 0x80536279, 0xf5424251, 0x368c8b16, 0xdfcd849e,
    0x29c0d712, 0x7f0d0389, 0x4e045c56, 0x0d60a466, 0xf2517287, 0xd8e1a2d8,
    0x64196398, 0xcc862c4a, 0x6a127991, 0xb6e5819e, 0x54e17935, 0x3d992c10,
    0xf16c26b5, 0xc4d41bb1, 0x1911da35, 0xaaf90423, 0x129400aa, 0x0f70c217,
    0xf1d3aaed, 0x5de63250, 0xf76e8049, 0x06924738, 0xb3392201, 0xffecd315,
    0xd0b0ef7c, 0x3b7c62bb, 0x1dc288e7, 0x47ddaf76, 0xb2a5a281, 0x262bfe95,
    0xb572b997, 0x1d024fbf, 0xa022e25e, 0x8eb99201, 0x964d7aad, 0x02fad903,
    0xe51d0b2b, 0xfa67ccec, 0x18ca3996, 0x01267249, 0x8f331057, 0x7f61d99e,
    0x67f4d004, 0x229192c5, 0x797443a8, 0x32cb232a, 0x9fd2f941, 0x3e6a297e,
    0xb1c05cf0, 0x3641d8ee, 0xf99958c8, 0x9a5e47e0, 0x3af9cab7, 0xc4438008,
    0x1e2ddf1f, 0x0a7db5f2, 0x6f30d7e0, 0x9c1fb928, 0x21aa9d02, 0x7705d2b5,
    0x143f5fb9, 0xf2a7a4b4, 0xd7b50b40, 0x7dd8303e, 0x41346e51, 0x39199848,
    0x352b0040, 0x6e8af776, 0x6fa9ee27, 0x94ecc437, 0xa0958fe3, 0x72e0dea2,
    0x62617b51, 0x0af69877, 0xb679eef1, 0x7b39d344, 0x0da5b104, 0xe8b3fb66,
    0x5f20f529, 0x6a2358bc, 0x92d09feb, 0x1250be37, 0xc0fee407, 0xe5a80aa7,
    0x8ef92886, 0xdfc39c28, 0x1f1e380f, 0x08b9295a, 0xf4ac0938, 0xb49137cc,
    0xd356998f, 0x13ca82fe, 0x3a362a2d, 0xba2cb647, 0xb5485c84, 0x86974022,
    0x7f844e34, 0xc156105d, 0xc04ca2ed, 0xdafcdc9c, 0xa0df5a3d, 0xcddd7876,
    0x75044f1a, 0xd134231d, 0x8c9393c2, 0x2c8b5eb0, 0x74aac544, 0x416ba832,
    0x912dca3e, 0xe6ba58f1, 0x70955165, 0xadb16a95, 0xf808a300, 0x4be22aff,
    0xc2e2d21c, 0xdb6c15f8, 0x1896cf6c, 0x44e7ae1d, 0xe3dec10a, 0x3f98af89,
    0xd67a29b5, 0x75f952d1, 0x7beb7a87, 0x473af415, 0x3fe536f5, 0xa1b25f0b,
    0xc95471e3, 0x822f8037, 0x2cc21cd0, 0x9a1f1b57, 0xfd504320, 0x6d3af127,
    0x47102440, 0x386e051e, 0x01dc8ae0, 0xbd357c6b, 0xd38f2cf0, 0x61e57ee8,
    0x7189d1d2, 0x335f349c, 0xc35fa630, 0xfe56649e, 0xba231205, 0x27b8d11d,
    0x26658bc6, 0x0d7fbd83, 0x12587e67, 0x474b1f9f, 0xbe3d5a3f, 0x2ea9623d,
    0x5fdfe1a5, 0x6e21730c, 0xf293b6dc, 0xea56abe1, 0x9696e363, 0x2db56ef3,
    0x7e11a000, 0xfde175b0, 0xc61b626c, 0x21e2ceb1, 0xdeb8034b, 0x6b4e0ba2,
    0xef29419b, 0x001bd4ee, 0x01aaf1a6, 0x78a158de, 0x33d39848, 0x19b300a2,
    0x3d1544b7, 0x6e7fccfb, 0xca4547bf, 0x5972eb7e, 0xb3f97ac8, 0x5087f36b,
    0xb89774ff, 0xb4e0daec, 0x97ab7bf6, 0x495eb157, 0xc867920e, 0x09892c99,
    0x1d4d12e5, 0xee0da9f6, 0xdb74a886, 0x35dbbe4b, 0xd2b4c5c8, 0x6b46d151,
    0x2e12cd55, 0x3565c948, 0x7130fe73, 0xf99576f4, 0x06123330, 0x0dfc7acb,
    0xbdbaa471, 0xbe24248c, 0x1f53c7e5, 0x4cb38939, 0x1b2b1d46, 0x6f697287,
    0x36fee312, 0xe71ce356, 0xcbfd8e82, 0x544d3a1f, 0x757be810, 0xb67f54a6,
    0x318143d8, 0xa8421d35, 0x09f4b966, 0x40525c64, 0xfaf16f83, 0xd63500ac,
    0x1994f6ba, 0x162db3fe, 0x6a0c403a, 0xc56bff67, 0x0c2e1fa4, 0x1af767c0,
    0xa6ecdb2e, 0xde82b934, 0x499ddcb7, 0x6938a384, 0xbd3a8834, 0xe04abd2b,
    0xbd104e78, 0x1a5ad6ba, 0x0bd29336, 0x02bd076d, 0x4eebf427, 0xacf70037,
    0x28769508, 0xe339fff3, 0x01303635, 0x42bb96fd, 0xd8f7d952, 0xd35a9d18,
    0x7d587516, 0xa89309d6, 0xd6c72f67, 0xf677d6c0,
];

pub(super) static V2: [u32; 256] = [
    0x61253b04, 0x10d73890, 0xa691f69e, 0x1d980fde, 0xb23f52da, 0xb707311b,
    0x998a142f, 0xf4120e24, 0xa5722e82, 0xf327ee60, 0x0a7dfc35, 0x85e2ec8f,
    0xde751f2f, 0x82f12a43, 0x4de6769e, 0xf89c4c8c, 0xf0c38691, 0xbf4f970d,
    0xc9e9240d, 0x1177ca3d, 0xda2b99c7, 0x9ddc001c, 0x96e232cb, 0xd2dfc174,
    0x2e18c313, 0xf96d548d, 0x6b8a06cd, 0xc7811973, 0xcf6314cf, 0xeca9433e,
    0x70c18762, 0x8d24df02, 0xd2db5053, 0xb0f9c30a, 0xfc2c0cae, 0x3195e20f,
    0xaefd55b3, 0x0fbcc51c, 0x07341103, 0xbec11b3c, 0x152faa17, 0x88ded5f5,
    0x5d5bc7e8, 0x68e96850, 0x01324da5, 0xcc457384, 0xaae2a3b0, 0x8c9ca475,
    0x78b7d7f3, 0x66dc0ade, 0xc7713dee, 0xa061afaf, 0x05f30ef4, 0xfd3b4529,
    0x8655b052, 0xc3277b06, 0x23a52178, 0xc4ad0173, 0x212cba12, 0xf5a21bc0,
    0xacabeeef, 0xd7c6b364, 0x36be7d7d, 0xc1aed7ce, 0x8500b0ae, 0xe2b1545f,
    0xda0283fa, 0x9a4fa71d, 0x0e70a102, 0x66d18673, 0x78c8d546, 0x02c9c0a4,
    0xab42cb7b, 0xae009d46, 0xbd6b68fb, 0x725f7798, 0x96136949, 0x6ebc0f8f,
    0xc0c6ec22, 0x1c925b57, 0x0beed45c, 0xa7024cf1, 0x60a96b39, 0x1cd8e7c7,
    0x193e21f5, 0xdbe7b760, 0x6e47544d, 0xc844e978, 0xce38d87a, 0x3228193b,
    0xd4d1996f, 0x3772c11c, 0x5d40b189, 0x955123ed, 0x2365096b, 0x428d89b0,
    0x30d3aeb0, 0xbb1b39ad, 0x544d1b08, 0x4027f65b, 0x1e8aa985, 0x0a986418,
    0x6564203a, 0x857faa63, 0x1eb50326, 0xaef0bd77, 0xe3c54a2c, 0x520c0a93,
    0xa0fa1a37, 0x39a1040f, 0x3e198e4f, 0x2aab2a49, 0x0a3a4d01, 0x5fc98ca1,
    0x49262550, 0xd962e266, 0x547e3c65, 0xf39bb39f, 0x859db798, 0xf9fd70e0,
    0x55c6098e, 0x0138432e, 0x0721fdb7, 0x7879f010, 0x98112de6, 0x52589cf2,
    0xf35b2dfb, 0x1db19bfd, 0x12913e13, 0xd570545d, 0xac34ece7, 0x0881bb46,
    0x4971a5b2, 0xc8129b36, 0xb1403707, 0x579cd97c, 0x670251f8, 0x54634bcd,
    0x02fca21b, 0xbac417ef, 0xf2d610cb, 0xa18f9143, 0xa0efff7e, 0x927e67df,
    0x9bbcdb12, 0xe110544b, 0x932eab4c, 0x9898ada1, 0xb410bf11, 0x64d4ccff,
    0xfb820758, 0x6497d568, 0x3cac4056, 0x898bd3d1, 0x15fa1724, 0xc3ad79a4,
    0x0cb54bdd, 0xf7678871, 0xcd3b3ea8, 0xa9a411d4, 0xf4c933bc, 0xfea83d93,
    0x83186e94, 0xdd2b9661, 0x1da83d2b, 0x10fedd64, 0x2d999e89, 0x369c6bcd,
    0xcacfea77, 0xa5084ced, 0x66b09749, 0xc9d85302, 0x1d1511bd, 0xd4bb07bf,
    0xcc1e65c4, 0x0cfb16d5, 0x8c7c0717, 0xc1dc2266, 0x08a632f6, 0xa07da24a,
    0x925077ff, 0x4d74b1ea, 0xf595e6df, 0x7c825866, 0x3791d5c9, 0x55fc7833,
    0x38c752de, 0xd129f0be, 0x2ce77fde, 0x32ed6e0e, 0x747861b4, 0xa176f58a,
    0xf1408c1e, 0xb5baeb2c, 0x63641e91, 0x2ffddd69, 0x4674f160, 0xfe3f121c,
    0xfb3c3f17, 0xc926951f, 0x1643a7fa, 0x9248c712, 0x8d5aaefd, 0xd99f2ca1,
    0x9c282b09, 0x62749cee, 0x5c9ac52d, 0x492971aa, 0x29f47898, 0xdc56c573,
    0x98242cd3, 0x9d1cd6c5, 0x355a9b74, 0xc3f79364, 0xb8b6953e, 0x3b036736,
    0xe153346a, 0x888b8613, 0x027cbd94, 0x74343e3c, 0x882275fd, 0x3dce8afa,
    0x6505ee63, 0x004a7938, 0x1bc69946, 0xa4d3f913, 0xc5cf2516, 0x4b7c9da9,
    0xe9a0042a, 0xd352b797, 0x9c94fdc4, 0xdf3349ca, 0x65247d3d, 0xc1c18321,
    0xf6e8472c, 0x36951313, 0xc53388ad, 0x4cda1834, 0xaf63c90b, 0x45af243b,
    0xc7365ce8, 0x29a331be, 0x50d38c0e, 0x8f2ac2e5, 0x066b7390, 0xdca670c3,
    0x35e0db93, 0xd95a6a89, 0x325ced82, 0x73e4c0a7, 0xe64e5b3c, 0xafa43147,
    0x7590eafd, 0x65be96b5, 0x01c8811b, 0xd07a2588,
];

pub(super) static V3: [u32; 256] = [
    0x4702dc58, 0x2c66509b, 0x9761d94b, 0xbf856b65, 0xc3dd50d2, 0x478f431d,
    0x92d2b06c, 0x2cfeb0be, 0x2a98b686, 0x7550ab2c, 0xd8467b6f, 0x4c270858,
    0x59037596, 0x15b69edd, 0x7a844068, 0xe942c8b8, 0xaea83609, 0x35cb2077,
    0xec746273, 0x7a93b0cb, 0x29411a26, 0x0b1c08e1, 0x31a40c92, 0x333f7168,
    0x4c7adf1e, 0x864cdae4, 0xb3056505, 0x68a76fa0, 0x85793cc6, 0xfe9325e0,
    0x823a2455, 0x2dd97d3c, 0x4a75bfa2, 0x471fd7d5, 0x9e8dd096, 0x2653171d,
    0x648eeb7a, 0xa27d1446, 0x1a9b9161, 0xf5b3936e, 0xe0ca3152, 0x023ec140,
    0x0b7d8501, 0xd54ea96b, 0x74633698, 0xedcc3a10, 0xb6ed6f7a, 0xace25d3e,
    0xf11ea0f0, 0xb6389bf3, 0x65740ef3, 0xf55e892c, 0xd51d6100, 0x9f625acd,
    0x53fd9143, 0xbfa27685, 0x5547271d, 0x97a9f2d8, 0x3d5decec, 0x6e9d49e3,
    0xfe0bc6b3, 0x6e86c861, 0xad412891, 0xc35fd10d, 0xa628e16a, 0xa6235509,
    0xb9191cd2, 0x93a52328, 0x2c9629ad, 0x40df9ce3, 0x600908f5, 0x0c09b9e5,
    0xdf44a70c, 0xd9d60b9d, 0xe375622d, 0xe9661dc6, 0x98c74f02, 0x4666e77f,
    0x01f9f3c4, 0xdde933a5, 0xe1eaf1ba, 0xe46e03e4, 0xb0682dd9, 0x163a0364,
    0x4cb21243, 0x732eae3b, 0xdb35fc55, 0x924feb8e, 0xa4618cd5, 0x7f32ab2f,
    0xa5b43bf1, 0xbe28d762, 0xe006503a, 0xd825656b, 0x42cd2ec3, 0x60c5f39d,
    0x52d72f76, 0xa21429a7, 0xb51d7e6b, 0x1b92fbf6, 0x0f8329ed, 0xdcea68c4,
    0x98651a78, 0xab51ea28, 0x95279536, 0xfb4f152a, 0x9ff1e90c, 0x81419b97,
    0xd4484967, 0x27d254ee, 0x288e44aa, 0xde20d63a, 0xf92f5c6d, 0xc6caab89,
    0x3827ee28, 0xa1a3904d, 0x7abd6884, 0xfe415c16, 0xbefedc1e, 0x0de11610,
    0x348f0599, 0x869a318c, 0x79ceccd0, 0xe00aa98e, 0xd77dbb0d, 0x7f7c12b1,
    0x5089ce59, 0xae4401b9, 0xcacdc461, 0x7d7d9a01, 0x8be0e90f, 0x1dc1e10b,
    0xcbb830f6, 0x8d0813ce, 0x97947b97, 0x6cfd7bd2, 0xbbad4ab4, 0xe5b59dc3,
    0x51583e91, 0x832bd49b, 0xa052b848, 0x0ddf08f1, 0xf2b08f66, 0x9f4302d7,
    0xd27d1df7, 0x484aa7ad, 0x33bb756f, 0xdeed8b8f, 0x72a0e325, 0xc0f1cba1,
    0xb8d15fa7, 0xc1965cb0, 0x360bcb26, 0xf14217ff, 0xeed93234, 0xd05c2689,
    0x45d0650e, 0xa905155f, 0x6169752d, 0xb9adb885, 0x887cb712, 0x8641a983,
    0x3851b9e1, 0x162b4133, 0x624ae145, 0x83a4d3c6, 0x9675da3d, 0x94cea1f4,
    0x9ef7c1e8, 0x4af4b3ca, 0xca9bf765, 0xbe6e37d7, 0x61f200df, 0x147069f1,
    0x351bf945, 0xbb914d0b, 0xe1da5256, 0x37f5ae44, 0x6e8aa5d7, 0x7dec89e2,
    0xb078be0c, 0x49d39672, 0x8371e97b, 0x63591b0e, 0x963856b6, 0xc800c55e,
    0x89bd1cd6, 0xbbfd01e9, 0xa3aad7df, 0x4789a596, 0xb4d1407f, 0x89c8fb77,
    0x3e792e6d, 0xfabd4da8, 0xfae2f0a5, 0x9d69b407, 0x7cf440e1, 0xf562e511,
    0xd86cef7b, 0xf4a584ed, 0x6eb97f47, 0xe2903a54, 0x1a927956, 0xb62196f0,
    0x3584d727, 0xc0c30967, 0x4f017292, 0xb1c17b15, 0x60804abb, 0xa2208798,
    0x34c17eea, 0xcfbcc74b, 0xb1d00ea5, 0xe7ec1e34, 0x20934684, 0x5add18a5,
    0x9d9d16c1, 0x8158be80, 0xb100c91c, 0x394a7f1e, 0x407b6ea2, 0x3dcf9933,
    0xc40a67de, 0x8afba93d, 0x2501fd63, 0x1210105e, 0xedd2fea9, 0x5d25c518,
    0xcb737660, 0x7ac3bb19, 0xa8507250, 0x283581e5, 0x927c9c30, 0xf2fe571c,
    0x91e58430, 0x5e5f98bc, 0x254a4ffe, 0xb75821f7, 0x149c2746, 0x646e5c21,
    0x3467f1c1, 0xcccffaa4, 0x5abc0bc3, 0xe2a636c9, 0x56c90e90, 0x711e6ec7,
    0xb107d769, 0x52686f9c, 0xe3b1423d, 0x3e40b587, 0x247e3bb7, 0xc71ba7bb,
    0x802fc390, 0xca83a73e, 0xd5015a38, 0xcc945cf8,
];
