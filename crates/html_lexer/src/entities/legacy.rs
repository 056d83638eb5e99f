//! Generated named character reference table (legacy HTML 4 set).
//!
//! Names carry no trailing `;`; the tokenizer consumes one if present.

pub(super) static LEGACY_NAMES: [&[u8]; 252] = [
    b"AElig",
    b"Aacute",
    b"Acirc",
    b"Agrave",
    b"Alpha",
    b"Aring",
    b"Atilde",
    b"Auml",
    b"Beta",
    b"Ccedil",
    b"Chi",
    b"Dagger",
    b"Delta",
    b"ETH",
    b"Eacute",
    b"Ecirc",
    b"Egrave",
    b"Epsilon",
    b"Eta",
    b"Euml",
    b"Gamma",
    b"Iacute",
    b"Icirc",
    b"Igrave",
    b"Iota",
    b"Iuml",
    b"Kappa",
    b"Lambda",
    b"Mu",
    b"Ntilde",
    b"Nu",
    b"OElig",
    b"Oacute",
    b"Ocirc",
    b"Ograve",
    b"Omega",
    b"Omicron",
    b"Oslash",
    b"Otilde",
    b"Ouml",
    b"Phi",
    b"Pi",
    b"Prime",
    b"Psi",
    b"Rho",
    b"Scaron",
    b"Sigma",
    b"THORN",
    b"Tau",
    b"Theta",
    b"Uacute",
    b"Ucirc",
    b"Ugrave",
    b"Upsilon",
    b"Uuml",
    b"Xi",
    b"Yacute",
    b"Yuml",
    b"Zeta",
    b"aacute",
    b"acirc",
    b"acute",
    b"aelig",
    b"agrave",
    b"alefsym",
    b"alpha",
    b"amp",
    b"and",
    b"ang",
    b"aring",
    b"asymp",
    b"atilde",
    b"auml",
    b"bdquo",
    b"beta",
    b"brvbar",
    b"bull",
    b"cap",
    b"ccedil",
    b"cedil",
    b"cent",
    b"chi",
    b"circ",
    b"clubs",
    b"cong",
    b"copy",
    b"crarr",
    b"cup",
    b"curren",
    b"dArr",
    b"dagger",
    b"darr",
    b"deg",
    b"delta",
    b"diams",
    b"divide",
    b"eacute",
    b"ecirc",
    b"egrave",
    b"empty",
    b"emsp",
    b"ensp",
    b"epsilon",
    b"equiv",
    b"eta",
    b"eth",
    b"euml",
    b"euro",
    b"exist",
    b"fnof",
    b"forall",
    b"frac12",
    b"frac14",
    b"frac34",
    b"frasl",
    b"gamma",
    b"ge",
    b"gt",
    b"hArr",
    b"harr",
    b"hearts",
    b"hellip",
    b"iacute",
    b"icirc",
    b"iexcl",
    b"igrave",
    b"image",
    b"infin",
    b"int",
    b"iota",
    b"iquest",
    b"isin",
    b"iuml",
    b"kappa",
    b"lArr",
    b"lambda",
    b"lang",
    b"laquo",
    b"larr",
    b"lceil",
    b"ldquo",
    b"le",
    b"lfloor",
    b"lowast",
    b"loz",
    b"lrm",
    b"lsaquo",
    b"lsquo",
    b"lt",
    b"macr",
    b"mdash",
    b"micro",
    b"middot",
    b"minus",
    b"mu",
    b"nabla",
    b"nbsp",
    b"ndash",
    b"ne",
    b"ni",
    b"not",
    b"notin",
    b"nsub",
    b"ntilde",
    b"nu",
    b"oacute",
    b"ocirc",
    b"oelig",
    b"ograve",
    b"oline",
    b"omega",
    b"omicron",
    b"oplus",
    b"or",
    b"ordf",
    b"ordm",
    b"oslash",
    b"otilde",
    b"otimes",
    b"ouml",
    b"para",
    b"part",
    b"permil",
    b"perp",
    b"phi",
    b"pi",
    b"piv",
    b"plusmn",
    b"pound",
    b"prime",
    b"prod",
    b"prop",
    b"psi",
    b"quot",
    b"rArr",
    b"radic",
    b"rang",
    b"raquo",
    b"rarr",
    b"rceil",
    b"rdquo",
    b"real",
    b"reg",
    b"rfloor",
    b"rho",
    b"rlm",
    b"rsaquo",
    b"rsquo",
    b"sbquo",
    b"scaron",
    b"sdot",
    b"sect",
    b"shy",
    b"sigma",
    b"sigmaf",
    b"sim",
    b"spades",
    b"sub",
    b"sube",
    b"sum",
    b"sup",
    b"sup1",
    b"sup2",
    b"sup3",
    b"supe",
    b"szlig",
    b"tau",
    b"there4",
    b"theta",
    b"thetasym",
    b"thinsp",
    b"thorn",
    b"tilde",
    b"times",
    b"trade",
    b"uArr",
    b"uacute",
    b"uarr",
    b"ucirc",
    b"ugrave",
    b"uml",
    b"upsih",
    b"upsilon",
    b"uuml",
    b"weierp",
    b"xi",
    b"yacute",
    b"yen",
    b"yuml",
    b"zeta",
    b"zwj",
    b"zwnj",
];

pub(super) static LEGACY_VALUES: [[u16; 2]; 252] = [
    [0x00C6, 0x0000],
    [0x00C1, 0x0000],
    [0x00C2, 0x0000],
    [0x00C0, 0x0000],
    [0x0391, 0x0000],
    [0x00C5, 0x0000],
    [0x00C3, 0x0000],
    [0x00C4, 0x0000],
    [0x0392, 0x0000],
    [0x00C7, 0x0000],
    [0x03A7, 0x0000],
    [0x2021, 0x0000],
    [0x0394, 0x0000],
    [0x00D0, 0x0000],
    [0x00C9, 0x0000],
    [0x00CA, 0x0000],
    [0x00C8, 0x0000],
    [0x0395, 0x0000],
    [0x0397, 0x0000],
    [0x00CB, 0x0000],
    [0x0393, 0x0000],
    [0x00CD, 0x0000],
    [0x00CE, 0x0000],
    [0x00CC, 0x0000],
    [0x0399, 0x0000],
    [0x00CF, 0x0000],
    [0x039A, 0x0000],
    [0x039B, 0x0000],
    [0x039C, 0x0000],
    [0x00D1, 0x0000],
    [0x039D, 0x0000],
    [0x0152, 0x0000],
    [0x00D3, 0x0000],
    [0x00D4, 0x0000],
    [0x00D2, 0x0000],
    [0x03A9, 0x0000],
    [0x039F, 0x0000],
    [0x00D8, 0x0000],
    [0x00D5, 0x0000],
    [0x00D6, 0x0000],
    [0x03A6, 0x0000],
    [0x03A0, 0x0000],
    [0x2033, 0x0000],
    [0x03A8, 0x0000],
    [0x03A1, 0x0000],
    [0x0160, 0x0000],
    [0x03A3, 0x0000],
    [0x00DE, 0x0000],
    [0x03A4, 0x0000],
    [0x0398, 0x0000],
    [0x00DA, 0x0000],
    [0x00DB, 0x0000],
    [0x00D9, 0x0000],
    [0x03A5, 0x0000],
    [0x00DC, 0x0000],
    [0x039E, 0x0000],
    [0x00DD, 0x0000],
    [0x0178, 0x0000],
    [0x0396, 0x0000],
    [0x00E1, 0x0000],
    [0x00E2, 0x0000],
    [0x00B4, 0x0000],
    [0x00E6, 0x0000],
    [0x00E0, 0x0000],
    [0x2135, 0x0000],
    [0x03B1, 0x0000],
    [0x0026, 0x0000],
    [0x2227, 0x0000],
    [0x2220, 0x0000],
    [0x00E5, 0x0000],
    [0x2248, 0x0000],
    [0x00E3, 0x0000],
    [0x00E4, 0x0000],
    [0x201E, 0x0000],
    [0x03B2, 0x0000],
    [0x00A6, 0x0000],
    [0x2022, 0x0000],
    [0x2229, 0x0000],
    [0x00E7, 0x0000],
    [0x00B8, 0x0000],
    [0x00A2, 0x0000],
    [0x03C7, 0x0000],
    [0x02C6, 0x0000],
    [0x2663, 0x0000],
    [0x2245, 0x0000],
    [0x00A9, 0x0000],
    [0x21B5, 0x0000],
    [0x222A, 0x0000],
    [0x00A4, 0x0000],
    [0x21D3, 0x0000],
    [0x2020, 0x0000],
    [0x2193, 0x0000],
    [0x00B0, 0x0000],
    [0x03B4, 0x0000],
    [0x2666, 0x0000],
    [0x00F7, 0x0000],
    [0x00E9, 0x0000],
    [0x00EA, 0x0000],
    [0x00E8, 0x0000],
    [0x2205, 0x0000],
    [0x2003, 0x0000],
    [0x2002, 0x0000],
    [0x03B5, 0x0000],
    [0x2261, 0x0000],
    [0x03B7, 0x0000],
    [0x00F0, 0x0000],
    [0x00EB, 0x0000],
    [0x20AC, 0x0000],
    [0x2203, 0x0000],
    [0x0192, 0x0000],
    [0x2200, 0x0000],
    [0x00BD, 0x0000],
    [0x00BC, 0x0000],
    [0x00BE, 0x0000],
    [0x2044, 0x0000],
    [0x03B3, 0x0000],
    [0x2265, 0x0000],
    [0x003E, 0x0000],
    [0x21D4, 0x0000],
    [0x2194, 0x0000],
    [0x2665, 0x0000],
    [0x2026, 0x0000],
    [0x00ED, 0x0000],
    [0x00EE, 0x0000],
    [0x00A1, 0x0000],
    [0x00EC, 0x0000],
    [0x2111, 0x0000],
    [0x221E, 0x0000],
    [0x222B, 0x0000],
    [0x03B9, 0x0000],
    [0x00BF, 0x0000],
    [0x2208, 0x0000],
    [0x00EF, 0x0000],
    [0x03BA, 0x0000],
    [0x21D0, 0x0000],
    [0x03BB, 0x0000],
    [0x2329, 0x0000],
    [0x00AB, 0x0000],
    [0x2190, 0x0000],
    [0x2308, 0x0000],
    [0x201C, 0x0000],
    [0x2264, 0x0000],
    [0x230A, 0x0000],
    [0x2217, 0x0000],
    [0x25CA, 0x0000],
    [0x200E, 0x0000],
    [0x2039, 0x0000],
    [0x2018, 0x0000],
    [0x003C, 0x0000],
    [0x00AF, 0x0000],
    [0x2014, 0x0000],
    [0x00B5, 0x0000],
    [0x00B7, 0x0000],
    [0x2212, 0x0000],
    [0x03BC, 0x0000],
    [0x2207, 0x0000],
    [0x00A0, 0x0000],
    [0x2013, 0x0000],
    [0x2260, 0x0000],
    [0x220B, 0x0000],
    [0x00AC, 0x0000],
    [0x2209, 0x0000],
    [0x2284, 0x0000],
    [0x00F1, 0x0000],
    [0x03BD, 0x0000],
    [0x00F3, 0x0000],
    [0x00F4, 0x0000],
    [0x0153, 0x0000],
    [0x00F2, 0x0000],
    [0x203E, 0x0000],
    [0x03C9, 0x0000],
    [0x03BF, 0x0000],
    [0x2295, 0x0000],
    [0x2228, 0x0000],
    [0x00AA, 0x0000],
    [0x00BA, 0x0000],
    [0x00F8, 0x0000],
    [0x00F5, 0x0000],
    [0x2297, 0x0000],
    [0x00F6, 0x0000],
    [0x00B6, 0x0000],
    [0x2202, 0x0000],
    [0x2030, 0x0000],
    [0x22A5, 0x0000],
    [0x03C6, 0x0000],
    [0x03C0, 0x0000],
    [0x03D6, 0x0000],
    [0x00B1, 0x0000],
    [0x00A3, 0x0000],
    [0x2032, 0x0000],
    [0x220F, 0x0000],
    [0x221D, 0x0000],
    [0x03C8, 0x0000],
    [0x0022, 0x0000],
    [0x21D2, 0x0000],
    [0x221A, 0x0000],
    [0x232A, 0x0000],
    [0x00BB, 0x0000],
    [0x2192, 0x0000],
    [0x2309, 0x0000],
    [0x201D, 0x0000],
    [0x211C, 0x0000],
    [0x00AE, 0x0000],
    [0x230B, 0x0000],
    [0x03C1, 0x0000],
    [0x200F, 0x0000],
    [0x203A, 0x0000],
    [0x2019, 0x0000],
    [0x201A, 0x0000],
    [0x0161, 0x0000],
    [0x22C5, 0x0000],
    [0x00A7, 0x0000],
    [0x00AD, 0x0000],
    [0x03C3, 0x0000],
    [0x03C2, 0x0000],
    [0x223C, 0x0000],
    [0x2660, 0x0000],
    [0x2282, 0x0000],
    [0x2286, 0x0000],
    [0x2211, 0x0000],
    [0x2283, 0x0000],
    [0x00B9, 0x0000],
    [0x00B2, 0x0000],
    [0x00B3, 0x0000],
    [0x2287, 0x0000],
    [0x00DF, 0x0000],
    [0x03C4, 0x0000],
    [0x2234, 0x0000],
    [0x03B8, 0x0000],
    [0x03D1, 0x0000],
    [0x2009, 0x0000],
    [0x00FE, 0x0000],
    [0x02DC, 0x0000],
    [0x00D7, 0x0000],
    [0x2122, 0x0000],
    [0x21D1, 0x0000],
    [0x00FA, 0x0000],
    [0x2191, 0x0000],
    [0x00FB, 0x0000],
    [0x00F9, 0x0000],
    [0x00A8, 0x0000],
    [0x03D2, 0x0000],
    [0x03C5, 0x0000],
    [0x00FC, 0x0000],
    [0x2118, 0x0000],
    [0x03BE, 0x0000],
    [0x00FD, 0x0000],
    [0x00A5, 0x0000],
    [0x00FF, 0x0000],
    [0x03B6, 0x0000],
    [0x200D, 0x0000],
    [0x200C, 0x0000],
];
