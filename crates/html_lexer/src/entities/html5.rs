//! Generated named character reference table (HTML5 set).
//!
//! Names are sorted bytewise; names valid without a trailing `;` appear both
//! with and without it. A zero second unit means a single-unit value.

pub(super) static HTML5_NAMES: [&[u8]; 2231] = [
    b"AElig",
    b"AElig;",
    b"AMP",
    b"AMP;",
    b"Aacute",
    b"Aacute;",
    b"Abreve;",
    b"Acirc",
    b"Acirc;",
    b"Acy;",
    b"Afr;",
    b"Agrave",
    b"Agrave;",
    b"Alpha;",
    b"Amacr;",
    b"And;",
    b"Aogon;",
    b"Aopf;",
    b"ApplyFunction;",
    b"Aring",
    b"Aring;",
    b"Ascr;",
    b"Assign;",
    b"Atilde",
    b"Atilde;",
    b"Auml",
    b"Auml;",
    b"Backslash;",
    b"Barv;",
    b"Barwed;",
    b"Bcy;",
    b"Because;",
    b"Bernoullis;",
    b"Beta;",
    b"Bfr;",
    b"Bopf;",
    b"Breve;",
    b"Bscr;",
    b"Bumpeq;",
    b"CHcy;",
    b"COPY",
    b"COPY;",
    b"Cacute;",
    b"Cap;",
    b"CapitalDifferentialD;",
    b"Cayleys;",
    b"Ccaron;",
    b"Ccedil",
    b"Ccedil;",
    b"Ccirc;",
    b"Cconint;",
    b"Cdot;",
    b"Cedilla;",
    b"CenterDot;",
    b"Cfr;",
    b"Chi;",
    b"CircleDot;",
    b"CircleMinus;",
    b"CirclePlus;",
    b"CircleTimes;",
    b"ClockwiseContourIntegral;",
    b"CloseCurlyDoubleQuote;",
    b"CloseCurlyQuote;",
    b"Colon;",
    b"Colone;",
    b"Congruent;",
    b"Conint;",
    b"ContourIntegral;",
    b"Copf;",
    b"Coproduct;",
    b"CounterClockwiseContourIntegral;",
    b"Cross;",
    b"Cscr;",
    b"Cup;",
    b"CupCap;",
    b"DD;",
    b"DDotrahd;",
    b"DJcy;",
    b"DScy;",
    b"DZcy;",
    b"Dagger;",
    b"Darr;",
    b"Dashv;",
    b"Dcaron;",
    b"Dcy;",
    b"Del;",
    b"Delta;",
    b"Dfr;",
    b"DiacriticalAcute;",
    b"DiacriticalDot;",
    b"DiacriticalDoubleAcute;",
    b"DiacriticalGrave;",
    b"DiacriticalTilde;",
    b"Diamond;",
    b"DifferentialD;",
    b"Dopf;",
    b"Dot;",
    b"DotDot;",
    b"DotEqual;",
    b"DoubleContourIntegral;",
    b"DoubleDot;",
    b"DoubleDownArrow;",
    b"DoubleLeftArrow;",
    b"DoubleLeftRightArrow;",
    b"DoubleLeftTee;",
    b"DoubleLongLeftArrow;",
    b"DoubleLongLeftRightArrow;",
    b"DoubleLongRightArrow;",
    b"DoubleRightArrow;",
    b"DoubleRightTee;",
    b"DoubleUpArrow;",
    b"DoubleUpDownArrow;",
    b"DoubleVerticalBar;",
    b"DownArrow;",
    b"DownArrowBar;",
    b"DownArrowUpArrow;",
    b"DownBreve;",
    b"DownLeftRightVector;",
    b"DownLeftTeeVector;",
    b"DownLeftVector;",
    b"DownLeftVectorBar;",
    b"DownRightTeeVector;",
    b"DownRightVector;",
    b"DownRightVectorBar;",
    b"DownTee;",
    b"DownTeeArrow;",
    b"Downarrow;",
    b"Dscr;",
    b"Dstrok;",
    b"ENG;",
    b"ETH",
    b"ETH;",
    b"Eacute",
    b"Eacute;",
    b"Ecaron;",
    b"Ecirc",
    b"Ecirc;",
    b"Ecy;",
    b"Edot;",
    b"Efr;",
    b"Egrave",
    b"Egrave;",
    b"Element;",
    b"Emacr;",
    b"EmptySmallSquare;",
    b"EmptyVerySmallSquare;",
    b"Eogon;",
    b"Eopf;",
    b"Epsilon;",
    b"Equal;",
    b"EqualTilde;",
    b"Equilibrium;",
    b"Escr;",
    b"Esim;",
    b"Eta;",
    b"Euml",
    b"Euml;",
    b"Exists;",
    b"ExponentialE;",
    b"Fcy;",
    b"Ffr;",
    b"FilledSmallSquare;",
    b"FilledVerySmallSquare;",
    b"Fopf;",
    b"ForAll;",
    b"Fouriertrf;",
    b"Fscr;",
    b"GJcy;",
    b"GT",
    b"GT;",
    b"Gamma;",
    b"Gammad;",
    b"Gbreve;",
    b"Gcedil;",
    b"Gcirc;",
    b"Gcy;",
    b"Gdot;",
    b"Gfr;",
    b"Gg;",
    b"Gopf;",
    b"GreaterEqual;",
    b"GreaterEqualLess;",
    b"GreaterFullEqual;",
    b"GreaterGreater;",
    b"GreaterLess;",
    b"GreaterSlantEqual;",
    b"GreaterTilde;",
    b"Gscr;",
    b"Gt;",
    b"HARDcy;",
    b"Hacek;",
    b"Hat;",
    b"Hcirc;",
    b"Hfr;",
    b"HilbertSpace;",
    b"Hopf;",
    b"HorizontalLine;",
    b"Hscr;",
    b"Hstrok;",
    b"HumpDownHump;",
    b"HumpEqual;",
    b"IEcy;",
    b"IJlig;",
    b"IOcy;",
    b"Iacute",
    b"Iacute;",
    b"Icirc",
    b"Icirc;",
    b"Icy;",
    b"Idot;",
    b"Ifr;",
    b"Igrave",
    b"Igrave;",
    b"Im;",
    b"Imacr;",
    b"ImaginaryI;",
    b"Implies;",
    b"Int;",
    b"Integral;",
    b"Intersection;",
    b"InvisibleComma;",
    b"InvisibleTimes;",
    b"Iogon;",
    b"Iopf;",
    b"Iota;",
    b"Iscr;",
    b"Itilde;",
    b"Iukcy;",
    b"Iuml",
    b"Iuml;",
    b"Jcirc;",
    b"Jcy;",
    b"Jfr;",
    b"Jopf;",
    b"Jscr;",
    b"Jsercy;",
    b"Jukcy;",
    b"KHcy;",
    b"KJcy;",
    b"Kappa;",
    b"Kcedil;",
    b"Kcy;",
    b"Kfr;",
    b"Kopf;",
    b"Kscr;",
    b"LJcy;",
    b"LT",
    b"LT;",
    b"Lacute;",
    b"Lambda;",
    b"Lang;",
    b"Laplacetrf;",
    b"Larr;",
    b"Lcaron;",
    b"Lcedil;",
    b"Lcy;",
    b"LeftAngleBracket;",
    b"LeftArrow;",
    b"LeftArrowBar;",
    b"LeftArrowRightArrow;",
    b"LeftCeiling;",
    b"LeftDoubleBracket;",
    b"LeftDownTeeVector;",
    b"LeftDownVector;",
    b"LeftDownVectorBar;",
    b"LeftFloor;",
    b"LeftRightArrow;",
    b"LeftRightVector;",
    b"LeftTee;",
    b"LeftTeeArrow;",
    b"LeftTeeVector;",
    b"LeftTriangle;",
    b"LeftTriangleBar;",
    b"LeftTriangleEqual;",
    b"LeftUpDownVector;",
    b"LeftUpTeeVector;",
    b"LeftUpVector;",
    b"LeftUpVectorBar;",
    b"LeftVector;",
    b"LeftVectorBar;",
    b"Leftarrow;",
    b"Leftrightarrow;",
    b"LessEqualGreater;",
    b"LessFullEqual;",
    b"LessGreater;",
    b"LessLess;",
    b"LessSlantEqual;",
    b"LessTilde;",
    b"Lfr;",
    b"Ll;",
    b"Lleftarrow;",
    b"Lmidot;",
    b"LongLeftArrow;",
    b"LongLeftRightArrow;",
    b"LongRightArrow;",
    b"Longleftarrow;",
    b"Longleftrightarrow;",
    b"Longrightarrow;",
    b"Lopf;",
    b"LowerLeftArrow;",
    b"LowerRightArrow;",
    b"Lscr;",
    b"Lsh;",
    b"Lstrok;",
    b"Lt;",
    b"Map;",
    b"Mcy;",
    b"MediumSpace;",
    b"Mellintrf;",
    b"Mfr;",
    b"MinusPlus;",
    b"Mopf;",
    b"Mscr;",
    b"Mu;",
    b"NJcy;",
    b"Nacute;",
    b"Ncaron;",
    b"Ncedil;",
    b"Ncy;",
    b"NegativeMediumSpace;",
    b"NegativeThickSpace;",
    b"NegativeThinSpace;",
    b"NegativeVeryThinSpace;",
    b"NestedGreaterGreater;",
    b"NestedLessLess;",
    b"NewLine;",
    b"Nfr;",
    b"NoBreak;",
    b"NonBreakingSpace;",
    b"Nopf;",
    b"Not;",
    b"NotCongruent;",
    b"NotCupCap;",
    b"NotDoubleVerticalBar;",
    b"NotElement;",
    b"NotEqual;",
    b"NotEqualTilde;",
    b"NotExists;",
    b"NotGreater;",
    b"NotGreaterEqual;",
    b"NotGreaterFullEqual;",
    b"NotGreaterGreater;",
    b"NotGreaterLess;",
    b"NotGreaterSlantEqual;",
    b"NotGreaterTilde;",
    b"NotHumpDownHump;",
    b"NotHumpEqual;",
    b"NotLeftTriangle;",
    b"NotLeftTriangleBar;",
    b"NotLeftTriangleEqual;",
    b"NotLess;",
    b"NotLessEqual;",
    b"NotLessGreater;",
    b"NotLessLess;",
    b"NotLessSlantEqual;",
    b"NotLessTilde;",
    b"NotNestedGreaterGreater;",
    b"NotNestedLessLess;",
    b"NotPrecedes;",
    b"NotPrecedesEqual;",
    b"NotPrecedesSlantEqual;",
    b"NotReverseElement;",
    b"NotRightTriangle;",
    b"NotRightTriangleBar;",
    b"NotRightTriangleEqual;",
    b"NotSquareSubset;",
    b"NotSquareSubsetEqual;",
    b"NotSquareSuperset;",
    b"NotSquareSupersetEqual;",
    b"NotSubset;",
    b"NotSubsetEqual;",
    b"NotSucceeds;",
    b"NotSucceedsEqual;",
    b"NotSucceedsSlantEqual;",
    b"NotSucceedsTilde;",
    b"NotSuperset;",
    b"NotSupersetEqual;",
    b"NotTilde;",
    b"NotTildeEqual;",
    b"NotTildeFullEqual;",
    b"NotTildeTilde;",
    b"NotVerticalBar;",
    b"Nscr;",
    b"Ntilde",
    b"Ntilde;",
    b"Nu;",
    b"OElig;",
    b"Oacute",
    b"Oacute;",
    b"Ocirc",
    b"Ocirc;",
    b"Ocy;",
    b"Odblac;",
    b"Ofr;",
    b"Ograve",
    b"Ograve;",
    b"Omacr;",
    b"Omega;",
    b"Omicron;",
    b"Oopf;",
    b"OpenCurlyDoubleQuote;",
    b"OpenCurlyQuote;",
    b"Or;",
    b"Oscr;",
    b"Oslash",
    b"Oslash;",
    b"Otilde",
    b"Otilde;",
    b"Otimes;",
    b"Ouml",
    b"Ouml;",
    b"OverBar;",
    b"OverBrace;",
    b"OverBracket;",
    b"OverParenthesis;",
    b"PartialD;",
    b"Pcy;",
    b"Pfr;",
    b"Phi;",
    b"Pi;",
    b"PlusMinus;",
    b"Poincareplane;",
    b"Popf;",
    b"Pr;",
    b"Precedes;",
    b"PrecedesEqual;",
    b"PrecedesSlantEqual;",
    b"PrecedesTilde;",
    b"Prime;",
    b"Product;",
    b"Proportion;",
    b"Proportional;",
    b"Pscr;",
    b"Psi;",
    b"QUOT",
    b"QUOT;",
    b"Qfr;",
    b"Qopf;",
    b"Qscr;",
    b"RBarr;",
    b"REG",
    b"REG;",
    b"Racute;",
    b"Rang;",
    b"Rarr;",
    b"Rarrtl;",
    b"Rcaron;",
    b"Rcedil;",
    b"Rcy;",
    b"Re;",
    b"ReverseElement;",
    b"ReverseEquilibrium;",
    b"ReverseUpEquilibrium;",
    b"Rfr;",
    b"Rho;",
    b"RightAngleBracket;",
    b"RightArrow;",
    b"RightArrowBar;",
    b"RightArrowLeftArrow;",
    b"RightCeiling;",
    b"RightDoubleBracket;",
    b"RightDownTeeVector;",
    b"RightDownVector;",
    b"RightDownVectorBar;",
    b"RightFloor;",
    b"RightTee;",
    b"RightTeeArrow;",
    b"RightTeeVector;",
    b"RightTriangle;",
    b"RightTriangleBar;",
    b"RightTriangleEqual;",
    b"RightUpDownVector;",
    b"RightUpTeeVector;",
    b"RightUpVector;",
    b"RightUpVectorBar;",
    b"RightVector;",
    b"RightVectorBar;",
    b"Rightarrow;",
    b"Ropf;",
    b"RoundImplies;",
    b"Rrightarrow;",
    b"Rscr;",
    b"Rsh;",
    b"RuleDelayed;",
    b"SHCHcy;",
    b"SHcy;",
    b"SOFTcy;",
    b"Sacute;",
    b"Sc;",
    b"Scaron;",
    b"Scedil;",
    b"Scirc;",
    b"Scy;",
    b"Sfr;",
    b"ShortDownArrow;",
    b"ShortLeftArrow;",
    b"ShortRightArrow;",
    b"ShortUpArrow;",
    b"Sigma;",
    b"SmallCircle;",
    b"Sopf;",
    b"Sqrt;",
    b"Square;",
    b"SquareIntersection;",
    b"SquareSubset;",
    b"SquareSubsetEqual;",
    b"SquareSuperset;",
    b"SquareSupersetEqual;",
    b"SquareUnion;",
    b"Sscr;",
    b"Star;",
    b"Sub;",
    b"Subset;",
    b"SubsetEqual;",
    b"Succeeds;",
    b"SucceedsEqual;",
    b"SucceedsSlantEqual;",
    b"SucceedsTilde;",
    b"SuchThat;",
    b"Sum;",
    b"Sup;",
    b"Superset;",
    b"SupersetEqual;",
    b"Supset;",
    b"THORN",
    b"THORN;",
    b"TRADE;",
    b"TSHcy;",
    b"TScy;",
    b"Tab;",
    b"Tau;",
    b"Tcaron;",
    b"Tcedil;",
    b"Tcy;",
    b"Tfr;",
    b"Therefore;",
    b"Theta;",
    b"ThickSpace;",
    b"ThinSpace;",
    b"Tilde;",
    b"TildeEqual;",
    b"TildeFullEqual;",
    b"TildeTilde;",
    b"Topf;",
    b"TripleDot;",
    b"Tscr;",
    b"Tstrok;",
    b"Uacute",
    b"Uacute;",
    b"Uarr;",
    b"Uarrocir;",
    b"Ubrcy;",
    b"Ubreve;",
    b"Ucirc",
    b"Ucirc;",
    b"Ucy;",
    b"Udblac;",
    b"Ufr;",
    b"Ugrave",
    b"Ugrave;",
    b"Umacr;",
    b"UnderBar;",
    b"UnderBrace;",
    b"UnderBracket;",
    b"UnderParenthesis;",
    b"Union;",
    b"UnionPlus;",
    b"Uogon;",
    b"Uopf;",
    b"UpArrow;",
    b"UpArrowBar;",
    b"UpArrowDownArrow;",
    b"UpDownArrow;",
    b"UpEquilibrium;",
    b"UpTee;",
    b"UpTeeArrow;",
    b"Uparrow;",
    b"Updownarrow;",
    b"UpperLeftArrow;",
    b"UpperRightArrow;",
    b"Upsi;",
    b"Upsilon;",
    b"Uring;",
    b"Uscr;",
    b"Utilde;",
    b"Uuml",
    b"Uuml;",
    b"VDash;",
    b"Vbar;",
    b"Vcy;",
    b"Vdash;",
    b"Vdashl;",
    b"Vee;",
    b"Verbar;",
    b"Vert;",
    b"VerticalBar;",
    b"VerticalLine;",
    b"VerticalSeparator;",
    b"VerticalTilde;",
    b"VeryThinSpace;",
    b"Vfr;",
    b"Vopf;",
    b"Vscr;",
    b"Vvdash;",
    b"Wcirc;",
    b"Wedge;",
    b"Wfr;",
    b"Wopf;",
    b"Wscr;",
    b"Xfr;",
    b"Xi;",
    b"Xopf;",
    b"Xscr;",
    b"YAcy;",
    b"YIcy;",
    b"YUcy;",
    b"Yacute",
    b"Yacute;",
    b"Ycirc;",
    b"Ycy;",
    b"Yfr;",
    b"Yopf;",
    b"Yscr;",
    b"Yuml;",
    b"ZHcy;",
    b"Zacute;",
    b"Zcaron;",
    b"Zcy;",
    b"Zdot;",
    b"ZeroWidthSpace;",
    b"Zeta;",
    b"Zfr;",
    b"Zopf;",
    b"Zscr;",
    b"aacute",
    b"aacute;",
    b"abreve;",
    b"ac;",
    b"acE;",
    b"acd;",
    b"acirc",
    b"acirc;",
    b"acute",
    b"acute;",
    b"acy;",
    b"aelig",
    b"aelig;",
    b"af;",
    b"afr;",
    b"agrave",
    b"agrave;",
    b"alefsym;",
    b"aleph;",
    b"alpha;",
    b"amacr;",
    b"amalg;",
    b"amp",
    b"amp;",
    b"and;",
    b"andand;",
    b"andd;",
    b"andslope;",
    b"andv;",
    b"ang;",
    b"ange;",
    b"angle;",
    b"angmsd;",
    b"angmsdaa;",
    b"angmsdab;",
    b"angmsdac;",
    b"angmsdad;",
    b"angmsdae;",
    b"angmsdaf;",
    b"angmsdag;",
    b"angmsdah;",
    b"angrt;",
    b"angrtvb;",
    b"angrtvbd;",
    b"angsph;",
    b"angst;",
    b"angzarr;",
    b"aogon;",
    b"aopf;",
    b"ap;",
    b"apE;",
    b"apacir;",
    b"ape;",
    b"apid;",
    b"apos;",
    b"approx;",
    b"approxeq;",
    b"aring",
    b"aring;",
    b"ascr;",
    b"ast;",
    b"asymp;",
    b"asympeq;",
    b"atilde",
    b"atilde;",
    b"auml",
    b"auml;",
    b"awconint;",
    b"awint;",
    b"bNot;",
    b"backcong;",
    b"backepsilon;",
    b"backprime;",
    b"backsim;",
    b"backsimeq;",
    b"barvee;",
    b"barwed;",
    b"barwedge;",
    b"bbrk;",
    b"bbrktbrk;",
    b"bcong;",
    b"bcy;",
    b"bdquo;",
    b"becaus;",
    b"because;",
    b"bemptyv;",
    b"bepsi;",
    b"bernou;",
    b"beta;",
    b"beth;",
    b"between;",
    b"bfr;",
    b"bigcap;",
    b"bigcirc;",
    b"bigcup;",
    b"bigodot;",
    b"bigoplus;",
    b"bigotimes;",
    b"bigsqcup;",
    b"bigstar;",
    b"bigtriangledown;",
    b"bigtriangleup;",
    b"biguplus;",
    b"bigvee;",
    b"bigwedge;",
    b"bkarow;",
    b"blacklozenge;",
    b"blacksquare;",
    b"blacktriangle;",
    b"blacktriangledown;",
    b"blacktriangleleft;",
    b"blacktriangleright;",
    b"blank;",
    b"blk12;",
    b"blk14;",
    b"blk34;",
    b"block;",
    b"bne;",
    b"bnequiv;",
    b"bnot;",
    b"bopf;",
    b"bot;",
    b"bottom;",
    b"bowtie;",
    b"boxDL;",
    b"boxDR;",
    b"boxDl;",
    b"boxDr;",
    b"boxH;",
    b"boxHD;",
    b"boxHU;",
    b"boxHd;",
    b"boxHu;",
    b"boxUL;",
    b"boxUR;",
    b"boxUl;",
    b"boxUr;",
    b"boxV;",
    b"boxVH;",
    b"boxVL;",
    b"boxVR;",
    b"boxVh;",
    b"boxVl;",
    b"boxVr;",
    b"boxbox;",
    b"boxdL;",
    b"boxdR;",
    b"boxdl;",
    b"boxdr;",
    b"boxh;",
    b"boxhD;",
    b"boxhU;",
    b"boxhd;",
    b"boxhu;",
    b"boxminus;",
    b"boxplus;",
    b"boxtimes;",
    b"boxuL;",
    b"boxuR;",
    b"boxul;",
    b"boxur;",
    b"boxv;",
    b"boxvH;",
    b"boxvL;",
    b"boxvR;",
    b"boxvh;",
    b"boxvl;",
    b"boxvr;",
    b"bprime;",
    b"breve;",
    b"brvbar",
    b"brvbar;",
    b"bscr;",
    b"bsemi;",
    b"bsim;",
    b"bsime;",
    b"bsol;",
    b"bsolb;",
    b"bsolhsub;",
    b"bull;",
    b"bullet;",
    b"bump;",
    b"bumpE;",
    b"bumpe;",
    b"bumpeq;",
    b"cacute;",
    b"cap;",
    b"capand;",
    b"capbrcup;",
    b"capcap;",
    b"capcup;",
    b"capdot;",
    b"caps;",
    b"caret;",
    b"caron;",
    b"ccaps;",
    b"ccaron;",
    b"ccedil",
    b"ccedil;",
    b"ccirc;",
    b"ccups;",
    b"ccupssm;",
    b"cdot;",
    b"cedil",
    b"cedil;",
    b"cemptyv;",
    b"cent",
    b"cent;",
    b"centerdot;",
    b"cfr;",
    b"chcy;",
    b"check;",
    b"checkmark;",
    b"chi;",
    b"cir;",
    b"cirE;",
    b"circ;",
    b"circeq;",
    b"circlearrowleft;",
    b"circlearrowright;",
    b"circledR;",
    b"circledS;",
    b"circledast;",
    b"circledcirc;",
    b"circleddash;",
    b"cire;",
    b"cirfnint;",
    b"cirmid;",
    b"cirscir;",
    b"clubs;",
    b"clubsuit;",
    b"colon;",
    b"colone;",
    b"coloneq;",
    b"comma;",
    b"commat;",
    b"comp;",
    b"compfn;",
    b"complement;",
    b"complexes;",
    b"cong;",
    b"congdot;",
    b"conint;",
    b"copf;",
    b"coprod;",
    b"copy",
    b"copy;",
    b"copysr;",
    b"crarr;",
    b"cross;",
    b"cscr;",
    b"csub;",
    b"csube;",
    b"csup;",
    b"csupe;",
    b"ctdot;",
    b"cudarrl;",
    b"cudarrr;",
    b"cuepr;",
    b"cuesc;",
    b"cularr;",
    b"cularrp;",
    b"cup;",
    b"cupbrcap;",
    b"cupcap;",
    b"cupcup;",
    b"cupdot;",
    b"cupor;",
    b"cups;",
    b"curarr;",
    b"curarrm;",
    b"curlyeqprec;",
    b"curlyeqsucc;",
    b"curlyvee;",
    b"curlywedge;",
    b"curren",
    b"curren;",
    b"curvearrowleft;",
    b"curvearrowright;",
    b"cuvee;",
    b"cuwed;",
    b"cwconint;",
    b"cwint;",
    b"cylcty;",
    b"dArr;",
    b"dHar;",
    b"dagger;",
    b"daleth;",
    b"darr;",
    b"dash;",
    b"dashv;",
    b"dbkarow;",
    b"dblac;",
    b"dcaron;",
    b"dcy;",
    b"dd;",
    b"ddagger;",
    b"ddarr;",
    b"ddotseq;",
    b"deg",
    b"deg;",
    b"delta;",
    b"demptyv;",
    b"dfisht;",
    b"dfr;",
    b"dharl;",
    b"dharr;",
    b"diam;",
    b"diamond;",
    b"diamondsuit;",
    b"diams;",
    b"die;",
    b"digamma;",
    b"disin;",
    b"div;",
    b"divide",
    b"divide;",
    b"divideontimes;",
    b"divonx;",
    b"djcy;",
    b"dlcorn;",
    b"dlcrop;",
    b"dollar;",
    b"dopf;",
    b"dot;",
    b"doteq;",
    b"doteqdot;",
    b"dotminus;",
    b"dotplus;",
    b"dotsquare;",
    b"doublebarwedge;",
    b"downarrow;",
    b"downdownarrows;",
    b"downharpoonleft;",
    b"downharpoonright;",
    b"drbkarow;",
    b"drcorn;",
    b"drcrop;",
    b"dscr;",
    b"dscy;",
    b"dsol;",
    b"dstrok;",
    b"dtdot;",
    b"dtri;",
    b"dtrif;",
    b"duarr;",
    b"duhar;",
    b"dwangle;",
    b"dzcy;",
    b"dzigrarr;",
    b"eDDot;",
    b"eDot;",
    b"eacute",
    b"eacute;",
    b"easter;",
    b"ecaron;",
    b"ecir;",
    b"ecirc",
    b"ecirc;",
    b"ecolon;",
    b"ecy;",
    b"edot;",
    b"ee;",
    b"efDot;",
    b"efr;",
    b"eg;",
    b"egrave",
    b"egrave;",
    b"egs;",
    b"egsdot;",
    b"el;",
    b"elinters;",
    b"ell;",
    b"els;",
    b"elsdot;",
    b"emacr;",
    b"empty;",
    b"emptyset;",
    b"emptyv;",
    b"emsp13;",
    b"emsp14;",
    b"emsp;",
    b"eng;",
    b"ensp;",
    b"eogon;",
    b"eopf;",
    b"epar;",
    b"eparsl;",
    b"eplus;",
    b"epsi;",
    b"epsilon;",
    b"epsiv;",
    b"eqcirc;",
    b"eqcolon;",
    b"eqsim;",
    b"eqslantgtr;",
    b"eqslantless;",
    b"equals;",
    b"equest;",
    b"equiv;",
    b"equivDD;",
    b"eqvparsl;",
    b"erDot;",
    b"erarr;",
    b"escr;",
    b"esdot;",
    b"esim;",
    b"eta;",
    b"eth",
    b"eth;",
    b"euml",
    b"euml;",
    b"euro;",
    b"excl;",
    b"exist;",
    b"expectation;",
    b"exponentiale;",
    b"fallingdotseq;",
    b"fcy;",
    b"female;",
    b"ffilig;",
    b"fflig;",
    b"ffllig;",
    b"ffr;",
    b"filig;",
    b"fjlig;",
    b"flat;",
    b"fllig;",
    b"fltns;",
    b"fnof;",
    b"fopf;",
    b"forall;",
    b"fork;",
    b"forkv;",
    b"fpartint;",
    b"frac12",
    b"frac12;",
    b"frac13;",
    b"frac14",
    b"frac14;",
    b"frac15;",
    b"frac16;",
    b"frac18;",
    b"frac23;",
    b"frac25;",
    b"frac34",
    b"frac34;",
    b"frac35;",
    b"frac38;",
    b"frac45;",
    b"frac56;",
    b"frac58;",
    b"frac78;",
    b"frasl;",
    b"frown;",
    b"fscr;",
    b"gE;",
    b"gEl;",
    b"gacute;",
    b"gamma;",
    b"gammad;",
    b"gap;",
    b"gbreve;",
    b"gcirc;",
    b"gcy;",
    b"gdot;",
    b"ge;",
    b"gel;",
    b"geq;",
    b"geqq;",
    b"geqslant;",
    b"ges;",
    b"gescc;",
    b"gesdot;",
    b"gesdoto;",
    b"gesdotol;",
    b"gesl;",
    b"gesles;",
    b"gfr;",
    b"gg;",
    b"ggg;",
    b"gimel;",
    b"gjcy;",
    b"gl;",
    b"glE;",
    b"gla;",
    b"glj;",
    b"gnE;",
    b"gnap;",
    b"gnapprox;",
    b"gne;",
    b"gneq;",
    b"gneqq;",
    b"gnsim;",
    b"gopf;",
    b"grave;",
    b"gscr;",
    b"gsim;",
    b"gsime;",
    b"gsiml;",
    b"gt",
    b"gt;",
    b"gtcc;",
    b"gtcir;",
    b"gtdot;",
    b"gtlPar;",
    b"gtquest;",
    b"gtrapprox;",
    b"gtrarr;",
    b"gtrdot;",
    b"gtreqless;",
    b"gtreqqless;",
    b"gtrless;",
    b"gtrsim;",
    b"gvertneqq;",
    b"gvnE;",
    b"hArr;",
    b"hairsp;",
    b"half;",
    b"hamilt;",
    b"hardcy;",
    b"harr;",
    b"harrcir;",
    b"harrw;",
    b"hbar;",
    b"hcirc;",
    b"hearts;",
    b"heartsuit;",
    b"hellip;",
    b"hercon;",
    b"hfr;",
    b"hksearow;",
    b"hkswarow;",
    b"hoarr;",
    b"homtht;",
    b"hookleftarrow;",
    b"hookrightarrow;",
    b"hopf;",
    b"horbar;",
    b"hscr;",
    b"hslash;",
    b"hstrok;",
    b"hybull;",
    b"hyphen;",
    b"iacute",
    b"iacute;",
    b"ic;",
    b"icirc",
    b"icirc;",
    b"icy;",
    b"iecy;",
    b"iexcl",
    b"iexcl;",
    b"iff;",
    b"ifr;",
    b"igrave",
    b"igrave;",
    b"ii;",
    b"iiiint;",
    b"iiint;",
    b"iinfin;",
    b"iiota;",
    b"ijlig;",
    b"imacr;",
    b"image;",
    b"imagline;",
    b"imagpart;",
    b"imath;",
    b"imof;",
    b"imped;",
    b"in;",
    b"incare;",
    b"infin;",
    b"infintie;",
    b"inodot;",
    b"int;",
    b"intcal;",
    b"integers;",
    b"intercal;",
    b"intlarhk;",
    b"intprod;",
    b"iocy;",
    b"iogon;",
    b"iopf;",
    b"iota;",
    b"iprod;",
    b"iquest",
    b"iquest;",
    b"iscr;",
    b"isin;",
    b"isinE;",
    b"isindot;",
    b"isins;",
    b"isinsv;",
    b"isinv;",
    b"it;",
    b"itilde;",
    b"iukcy;",
    b"iuml",
    b"iuml;",
    b"jcirc;",
    b"jcy;",
    b"jfr;",
    b"jmath;",
    b"jopf;",
    b"jscr;",
    b"jsercy;",
    b"jukcy;",
    b"kappa;",
    b"kappav;",
    b"kcedil;",
    b"kcy;",
    b"kfr;",
    b"kgreen;",
    b"khcy;",
    b"kjcy;",
    b"kopf;",
    b"kscr;",
    b"lAarr;",
    b"lArr;",
    b"lAtail;",
    b"lBarr;",
    b"lE;",
    b"lEg;",
    b"lHar;",
    b"lacute;",
    b"laemptyv;",
    b"lagran;",
    b"lambda;",
    b"lang;",
    b"langd;",
    b"langle;",
    b"lap;",
    b"laquo",
    b"laquo;",
    b"larr;",
    b"larrb;",
    b"larrbfs;",
    b"larrfs;",
    b"larrhk;",
    b"larrlp;",
    b"larrpl;",
    b"larrsim;",
    b"larrtl;",
    b"lat;",
    b"latail;",
    b"late;",
    b"lates;",
    b"lbarr;",
    b"lbbrk;",
    b"lbrace;",
    b"lbrack;",
    b"lbrke;",
    b"lbrksld;",
    b"lbrkslu;",
    b"lcaron;",
    b"lcedil;",
    b"lceil;",
    b"lcub;",
    b"lcy;",
    b"ldca;",
    b"ldquo;",
    b"ldquor;",
    b"ldrdhar;",
    b"ldrushar;",
    b"ldsh;",
    b"le;",
    b"leftarrow;",
    b"leftarrowtail;",
    b"leftharpoondown;",
    b"leftharpoonup;",
    b"leftleftarrows;",
    b"leftrightarrow;",
    b"leftrightarrows;",
    b"leftrightharpoons;",
    b"leftrightsquigarrow;",
    b"leftthreetimes;",
    b"leg;",
    b"leq;",
    b"leqq;",
    b"leqslant;",
    b"les;",
    b"lescc;",
    b"lesdot;",
    b"lesdoto;",
    b"lesdotor;",
    b"lesg;",
    b"lesges;",
    b"lessapprox;",
    b"lessdot;",
    b"lesseqgtr;",
    b"lesseqqgtr;",
    b"lessgtr;",
    b"lesssim;",
    b"lfisht;",
    b"lfloor;",
    b"lfr;",
    b"lg;",
    b"lgE;",
    b"lhard;",
    b"lharu;",
    b"lharul;",
    b"lhblk;",
    b"ljcy;",
    b"ll;",
    b"llarr;",
    b"llcorner;",
    b"llhard;",
    b"lltri;",
    b"lmidot;",
    b"lmoust;",
    b"lmoustache;",
    b"lnE;",
    b"lnap;",
    b"lnapprox;",
    b"lne;",
    b"lneq;",
    b"lneqq;",
    b"lnsim;",
    b"loang;",
    b"loarr;",
    b"lobrk;",
    b"longleftarrow;",
    b"longleftrightarrow;",
    b"longmapsto;",
    b"longrightarrow;",
    b"looparrowleft;",
    b"looparrowright;",
    b"lopar;",
    b"lopf;",
    b"loplus;",
    b"lotimes;",
    b"lowast;",
    b"lowbar;",
    b"loz;",
    b"lozenge;",
    b"lozf;",
    b"lpar;",
    b"lparlt;",
    b"lrarr;",
    b"lrcorner;",
    b"lrhar;",
    b"lrhard;",
    b"lrm;",
    b"lrtri;",
    b"lsaquo;",
    b"lscr;",
    b"lsh;",
    b"lsim;",
    b"lsime;",
    b"lsimg;",
    b"lsqb;",
    b"lsquo;",
    b"lsquor;",
    b"lstrok;",
    b"lt",
    b"lt;",
    b"ltcc;",
    b"ltcir;",
    b"ltdot;",
    b"lthree;",
    b"ltimes;",
    b"ltlarr;",
    b"ltquest;",
    b"ltrPar;",
    b"ltri;",
    b"ltrie;",
    b"ltrif;",
    b"lurdshar;",
    b"luruhar;",
    b"lvertneqq;",
    b"lvnE;",
    b"mDDot;",
    b"macr",
    b"macr;",
    b"male;",
    b"malt;",
    b"maltese;",
    b"map;",
    b"mapsto;",
    b"mapstodown;",
    b"mapstoleft;",
    b"mapstoup;",
    b"marker;",
    b"mcomma;",
    b"mcy;",
    b"mdash;",
    b"measuredangle;",
    b"mfr;",
    b"mho;",
    b"micro",
    b"micro;",
    b"mid;",
    b"midast;",
    b"midcir;",
    b"middot",
    b"middot;",
    b"minus;",
    b"minusb;",
    b"minusd;",
    b"minusdu;",
    b"mlcp;",
    b"mldr;",
    b"mnplus;",
    b"models;",
    b"mopf;",
    b"mp;",
    b"mscr;",
    b"mstpos;",
    b"mu;",
    b"multimap;",
    b"mumap;",
    b"nGg;",
    b"nGt;",
    b"nGtv;",
    b"nLeftarrow;",
    b"nLeftrightarrow;",
    b"nLl;",
    b"nLt;",
    b"nLtv;",
    b"nRightarrow;",
    b"nVDash;",
    b"nVdash;",
    b"nabla;",
    b"nacute;",
    b"nang;",
    b"nap;",
    b"napE;",
    b"napid;",
    b"napos;",
    b"napprox;",
    b"natur;",
    b"natural;",
    b"naturals;",
    b"nbsp",
    b"nbsp;",
    b"nbump;",
    b"nbumpe;",
    b"ncap;",
    b"ncaron;",
    b"ncedil;",
    b"ncong;",
    b"ncongdot;",
    b"ncup;",
    b"ncy;",
    b"ndash;",
    b"ne;",
    b"neArr;",
    b"nearhk;",
    b"nearr;",
    b"nearrow;",
    b"nedot;",
    b"nequiv;",
    b"nesear;",
    b"nesim;",
    b"nexist;",
    b"nexists;",
    b"nfr;",
    b"ngE;",
    b"nge;",
    b"ngeq;",
    b"ngeqq;",
    b"ngeqslant;",
    b"nges;",
    b"ngsim;",
    b"ngt;",
    b"ngtr;",
    b"nhArr;",
    b"nharr;",
    b"nhpar;",
    b"ni;",
    b"nis;",
    b"nisd;",
    b"niv;",
    b"njcy;",
    b"nlArr;",
    b"nlE;",
    b"nlarr;",
    b"nldr;",
    b"nle;",
    b"nleftarrow;",
    b"nleftrightarrow;",
    b"nleq;",
    b"nleqq;",
    b"nleqslant;",
    b"nles;",
    b"nless;",
    b"nlsim;",
    b"nlt;",
    b"nltri;",
    b"nltrie;",
    b"nmid;",
    b"nopf;",
    b"not",
    b"not;",
    b"notin;",
    b"notinE;",
    b"notindot;",
    b"notinva;",
    b"notinvb;",
    b"notinvc;",
    b"notni;",
    b"notniva;",
    b"notnivb;",
    b"notnivc;",
    b"npar;",
    b"nparallel;",
    b"nparsl;",
    b"npart;",
    b"npolint;",
    b"npr;",
    b"nprcue;",
    b"npre;",
    b"nprec;",
    b"npreceq;",
    b"nrArr;",
    b"nrarr;",
    b"nrarrc;",
    b"nrarrw;",
    b"nrightarrow;",
    b"nrtri;",
    b"nrtrie;",
    b"nsc;",
    b"nsccue;",
    b"nsce;",
    b"nscr;",
    b"nshortmid;",
    b"nshortparallel;",
    b"nsim;",
    b"nsime;",
    b"nsimeq;",
    b"nsmid;",
    b"nspar;",
    b"nsqsube;",
    b"nsqsupe;",
    b"nsub;",
    b"nsubE;",
    b"nsube;",
    b"nsubset;",
    b"nsubseteq;",
    b"nsubseteqq;",
    b"nsucc;",
    b"nsucceq;",
    b"nsup;",
    b"nsupE;",
    b"nsupe;",
    b"nsupset;",
    b"nsupseteq;",
    b"nsupseteqq;",
    b"ntgl;",
    b"ntilde",
    b"ntilde;",
    b"ntlg;",
    b"ntriangleleft;",
    b"ntrianglelefteq;",
    b"ntriangleright;",
    b"ntrianglerighteq;",
    b"nu;",
    b"num;",
    b"numero;",
    b"numsp;",
    b"nvDash;",
    b"nvHarr;",
    b"nvap;",
    b"nvdash;",
    b"nvge;",
    b"nvgt;",
    b"nvinfin;",
    b"nvlArr;",
    b"nvle;",
    b"nvlt;",
    b"nvltrie;",
    b"nvrArr;",
    b"nvrtrie;",
    b"nvsim;",
    b"nwArr;",
    b"nwarhk;",
    b"nwarr;",
    b"nwarrow;",
    b"nwnear;",
    b"oS;",
    b"oacute",
    b"oacute;",
    b"oast;",
    b"ocir;",
    b"ocirc",
    b"ocirc;",
    b"ocy;",
    b"odash;",
    b"odblac;",
    b"odiv;",
    b"odot;",
    b"odsold;",
    b"oelig;",
    b"ofcir;",
    b"ofr;",
    b"ogon;",
    b"ograve",
    b"ograve;",
    b"ogt;",
    b"ohbar;",
    b"ohm;",
    b"oint;",
    b"olarr;",
    b"olcir;",
    b"olcross;",
    b"oline;",
    b"olt;",
    b"omacr;",
    b"omega;",
    b"omicron;",
    b"omid;",
    b"ominus;",
    b"oopf;",
    b"opar;",
    b"operp;",
    b"oplus;",
    b"or;",
    b"orarr;",
    b"ord;",
    b"order;",
    b"orderof;",
    b"ordf",
    b"ordf;",
    b"ordm",
    b"ordm;",
    b"origof;",
    b"oror;",
    b"orslope;",
    b"orv;",
    b"oscr;",
    b"oslash",
    b"oslash;",
    b"osol;",
    b"otilde",
    b"otilde;",
    b"otimes;",
    b"otimesas;",
    b"ouml",
    b"ouml;",
    b"ovbar;",
    b"par;",
    b"para",
    b"para;",
    b"parallel;",
    b"parsim;",
    b"parsl;",
    b"part;",
    b"pcy;",
    b"percnt;",
    b"period;",
    b"permil;",
    b"perp;",
    b"pertenk;",
    b"pfr;",
    b"phi;",
    b"phiv;",
    b"phmmat;",
    b"phone;",
    b"pi;",
    b"pitchfork;",
    b"piv;",
    b"planck;",
    b"planckh;",
    b"plankv;",
    b"plus;",
    b"plusacir;",
    b"plusb;",
    b"pluscir;",
    b"plusdo;",
    b"plusdu;",
    b"pluse;",
    b"plusmn",
    b"plusmn;",
    b"plussim;",
    b"plustwo;",
    b"pm;",
    b"pointint;",
    b"popf;",
    b"pound",
    b"pound;",
    b"pr;",
    b"prE;",
    b"prap;",
    b"prcue;",
    b"pre;",
    b"prec;",
    b"precapprox;",
    b"preccurlyeq;",
    b"preceq;",
    b"precnapprox;",
    b"precneqq;",
    b"precnsim;",
    b"precsim;",
    b"prime;",
    b"primes;",
    b"prnE;",
    b"prnap;",
    b"prnsim;",
    b"prod;",
    b"profalar;",
    b"profline;",
    b"profsurf;",
    b"prop;",
    b"propto;",
    b"prsim;",
    b"prurel;",
    b"pscr;",
    b"psi;",
    b"puncsp;",
    b"qfr;",
    b"qint;",
    b"qopf;",
    b"qprime;",
    b"qscr;",
    b"quaternions;",
    b"quatint;",
    b"quest;",
    b"questeq;",
    b"quot",
    b"quot;",
    b"rAarr;",
    b"rArr;",
    b"rAtail;",
    b"rBarr;",
    b"rHar;",
    b"race;",
    b"racute;",
    b"radic;",
    b"raemptyv;",
    b"rang;",
    b"rangd;",
    b"range;",
    b"rangle;",
    b"raquo",
    b"raquo;",
    b"rarr;",
    b"rarrap;",
    b"rarrb;",
    b"rarrbfs;",
    b"rarrc;",
    b"rarrfs;",
    b"rarrhk;",
    b"rarrlp;",
    b"rarrpl;",
    b"rarrsim;",
    b"rarrtl;",
    b"rarrw;",
    b"ratail;",
    b"ratio;",
    b"rationals;",
    b"rbarr;",
    b"rbbrk;",
    b"rbrace;",
    b"rbrack;",
    b"rbrke;",
    b"rbrksld;",
    b"rbrkslu;",
    b"rcaron;",
    b"rcedil;",
    b"rceil;",
    b"rcub;",
    b"rcy;",
    b"rdca;",
    b"rdldhar;",
    b"rdquo;",
    b"rdquor;",
    b"rdsh;",
    b"real;",
    b"realine;",
    b"realpart;",
    b"reals;",
    b"rect;",
    b"reg",
    b"reg;",
    b"rfisht;",
    b"rfloor;",
    b"rfr;",
    b"rhard;",
    b"rharu;",
    b"rharul;",
    b"rho;",
    b"rhov;",
    b"rightarrow;",
    b"rightarrowtail;",
    b"rightharpoondown;",
    b"rightharpoonup;",
    b"rightleftarrows;",
    b"rightleftharpoons;",
    b"rightrightarrows;",
    b"rightsquigarrow;",
    b"rightthreetimes;",
    b"ring;",
    b"risingdotseq;",
    b"rlarr;",
    b"rlhar;",
    b"rlm;",
    b"rmoust;",
    b"rmoustache;",
    b"rnmid;",
    b"roang;",
    b"roarr;",
    b"robrk;",
    b"ropar;",
    b"ropf;",
    b"roplus;",
    b"rotimes;",
    b"rpar;",
    b"rpargt;",
    b"rppolint;",
    b"rrarr;",
    b"rsaquo;",
    b"rscr;",
    b"rsh;",
    b"rsqb;",
    b"rsquo;",
    b"rsquor;",
    b"rthree;",
    b"rtimes;",
    b"rtri;",
    b"rtrie;",
    b"rtrif;",
    b"rtriltri;",
    b"ruluhar;",
    b"rx;",
    b"sacute;",
    b"sbquo;",
    b"sc;",
    b"scE;",
    b"scap;",
    b"scaron;",
    b"sccue;",
    b"sce;",
    b"scedil;",
    b"scirc;",
    b"scnE;",
    b"scnap;",
    b"scnsim;",
    b"scpolint;",
    b"scsim;",
    b"scy;",
    b"sdot;",
    b"sdotb;",
    b"sdote;",
    b"seArr;",
    b"searhk;",
    b"searr;",
    b"searrow;",
    b"sect",
    b"sect;",
    b"semi;",
    b"seswar;",
    b"setminus;",
    b"setmn;",
    b"sext;",
    b"sfr;",
    b"sfrown;",
    b"sharp;",
    b"shchcy;",
    b"shcy;",
    b"shortmid;",
    b"shortparallel;",
    b"shy",
    b"shy;",
    b"sigma;",
    b"sigmaf;",
    b"sigmav;",
    b"sim;",
    b"simdot;",
    b"sime;",
    b"simeq;",
    b"simg;",
    b"simgE;",
    b"siml;",
    b"simlE;",
    b"simne;",
    b"simplus;",
    b"simrarr;",
    b"slarr;",
    b"smallsetminus;",
    b"smashp;",
    b"smeparsl;",
    b"smid;",
    b"smile;",
    b"smt;",
    b"smte;",
    b"smtes;",
    b"softcy;",
    b"sol;",
    b"solb;",
    b"solbar;",
    b"sopf;",
    b"spades;",
    b"spadesuit;",
    b"spar;",
    b"sqcap;",
    b"sqcaps;",
    b"sqcup;",
    b"sqcups;",
    b"sqsub;",
    b"sqsube;",
    b"sqsubset;",
    b"sqsubseteq;",
    b"sqsup;",
    b"sqsupe;",
    b"sqsupset;",
    b"sqsupseteq;",
    b"squ;",
    b"square;",
    b"squarf;",
    b"squf;",
    b"srarr;",
    b"sscr;",
    b"ssetmn;",
    b"ssmile;",
    b"sstarf;",
    b"star;",
    b"starf;",
    b"straightepsilon;",
    b"straightphi;",
    b"strns;",
    b"sub;",
    b"subE;",
    b"subdot;",
    b"sube;",
    b"subedot;",
    b"submult;",
    b"subnE;",
    b"subne;",
    b"subplus;",
    b"subrarr;",
    b"subset;",
    b"subseteq;",
    b"subseteqq;",
    b"subsetneq;",
    b"subsetneqq;",
    b"subsim;",
    b"subsub;",
    b"subsup;",
    b"succ;",
    b"succapprox;",
    b"succcurlyeq;",
    b"succeq;",
    b"succnapprox;",
    b"succneqq;",
    b"succnsim;",
    b"succsim;",
    b"sum;",
    b"sung;",
    b"sup1",
    b"sup1;",
    b"sup2",
    b"sup2;",
    b"sup3",
    b"sup3;",
    b"sup;",
    b"supE;",
    b"supdot;",
    b"supdsub;",
    b"supe;",
    b"supedot;",
    b"suphsol;",
    b"suphsub;",
    b"suplarr;",
    b"supmult;",
    b"supnE;",
    b"supne;",
    b"supplus;",
    b"supset;",
    b"supseteq;",
    b"supseteqq;",
    b"supsetneq;",
    b"supsetneqq;",
    b"supsim;",
    b"supsub;",
    b"supsup;",
    b"swArr;",
    b"swarhk;",
    b"swarr;",
    b"swarrow;",
    b"swnwar;",
    b"szlig",
    b"szlig;",
    b"target;",
    b"tau;",
    b"tbrk;",
    b"tcaron;",
    b"tcedil;",
    b"tcy;",
    b"tdot;",
    b"telrec;",
    b"tfr;",
    b"there4;",
    b"therefore;",
    b"theta;",
    b"thetasym;",
    b"thetav;",
    b"thickapprox;",
    b"thicksim;",
    b"thinsp;",
    b"thkap;",
    b"thksim;",
    b"thorn",
    b"thorn;",
    b"tilde;",
    b"times",
    b"times;",
    b"timesb;",
    b"timesbar;",
    b"timesd;",
    b"tint;",
    b"toea;",
    b"top;",
    b"topbot;",
    b"topcir;",
    b"topf;",
    b"topfork;",
    b"tosa;",
    b"tprime;",
    b"trade;",
    b"triangle;",
    b"triangledown;",
    b"triangleleft;",
    b"trianglelefteq;",
    b"triangleq;",
    b"triangleright;",
    b"trianglerighteq;",
    b"tridot;",
    b"trie;",
    b"triminus;",
    b"triplus;",
    b"trisb;",
    b"tritime;",
    b"trpezium;",
    b"tscr;",
    b"tscy;",
    b"tshcy;",
    b"tstrok;",
    b"twixt;",
    b"twoheadleftarrow;",
    b"twoheadrightarrow;",
    b"uArr;",
    b"uHar;",
    b"uacute",
    b"uacute;",
    b"uarr;",
    b"ubrcy;",
    b"ubreve;",
    b"ucirc",
    b"ucirc;",
    b"ucy;",
    b"udarr;",
    b"udblac;",
    b"udhar;",
    b"ufisht;",
    b"ufr;",
    b"ugrave",
    b"ugrave;",
    b"uharl;",
    b"uharr;",
    b"uhblk;",
    b"ulcorn;",
    b"ulcorner;",
    b"ulcrop;",
    b"ultri;",
    b"umacr;",
    b"uml",
    b"uml;",
    b"uogon;",
    b"uopf;",
    b"uparrow;",
    b"updownarrow;",
    b"upharpoonleft;",
    b"upharpoonright;",
    b"uplus;",
    b"upsi;",
    b"upsih;",
    b"upsilon;",
    b"upuparrows;",
    b"urcorn;",
    b"urcorner;",
    b"urcrop;",
    b"uring;",
    b"urtri;",
    b"uscr;",
    b"utdot;",
    b"utilde;",
    b"utri;",
    b"utrif;",
    b"uuarr;",
    b"uuml",
    b"uuml;",
    b"uwangle;",
    b"vArr;",
    b"vBar;",
    b"vBarv;",
    b"vDash;",
    b"vangrt;",
    b"varepsilon;",
    b"varkappa;",
    b"varnothing;",
    b"varphi;",
    b"varpi;",
    b"varpropto;",
    b"varr;",
    b"varrho;",
    b"varsigma;",
    b"varsubsetneq;",
    b"varsubsetneqq;",
    b"varsupsetneq;",
    b"varsupsetneqq;",
    b"vartheta;",
    b"vartriangleleft;",
    b"vartriangleright;",
    b"vcy;",
    b"vdash;",
    b"vee;",
    b"veebar;",
    b"veeeq;",
    b"vellip;",
    b"verbar;",
    b"vert;",
    b"vfr;",
    b"vltri;",
    b"vnsub;",
    b"vnsup;",
    b"vopf;",
    b"vprop;",
    b"vrtri;",
    b"vscr;",
    b"vsubnE;",
    b"vsubne;",
    b"vsupnE;",
    b"vsupne;",
    b"vzigzag;",
    b"wcirc;",
    b"wedbar;",
    b"wedge;",
    b"wedgeq;",
    b"weierp;",
    b"wfr;",
    b"wopf;",
    b"wp;",
    b"wr;",
    b"wreath;",
    b"wscr;",
    b"xcap;",
    b"xcirc;",
    b"xcup;",
    b"xdtri;",
    b"xfr;",
    b"xhArr;",
    b"xharr;",
    b"xi;",
    b"xlArr;",
    b"xlarr;",
    b"xmap;",
    b"xnis;",
    b"xodot;",
    b"xopf;",
    b"xoplus;",
    b"xotime;",
    b"xrArr;",
    b"xrarr;",
    b"xscr;",
    b"xsqcup;",
    b"xuplus;",
    b"xutri;",
    b"xvee;",
    b"xwedge;",
    b"yacute",
    b"yacute;",
    b"yacy;",
    b"ycirc;",
    b"ycy;",
    b"yen",
    b"yen;",
    b"yfr;",
    b"yicy;",
    b"yopf;",
    b"yscr;",
    b"yucy;",
    b"yuml",
    b"yuml;",
    b"zacute;",
    b"zcaron;",
    b"zcy;",
    b"zdot;",
    b"zeetrf;",
    b"zeta;",
    b"zfr;",
    b"zhcy;",
    b"zigrarr;",
    b"zopf;",
    b"zscr;",
    b"zwj;",
    b"zwnj;",
];

pub(super) static HTML5_VALUES: [[u16; 2]; 2231] = [
    [0x00C6, 0x0000],
    [0x00C6, 0x0000],
    [0x0026, 0x0000],
    [0x0026, 0x0000],
    [0x00C1, 0x0000],
    [0x00C1, 0x0000],
    [0x0102, 0x0000],
    [0x00C2, 0x0000],
    [0x00C2, 0x0000],
    [0x0410, 0x0000],
    [0xD835, 0xDD04],
    [0x00C0, 0x0000],
    [0x00C0, 0x0000],
    [0x0391, 0x0000],
    [0x0100, 0x0000],
    [0x2A53, 0x0000],
    [0x0104, 0x0000],
    [0xD835, 0xDD38],
    [0x2061, 0x0000],
    [0x00C5, 0x0000],
    [0x00C5, 0x0000],
    [0xD835, 0xDC9C],
    [0x2254, 0x0000],
    [0x00C3, 0x0000],
    [0x00C3, 0x0000],
    [0x00C4, 0x0000],
    [0x00C4, 0x0000],
    [0x2216, 0x0000],
    [0x2AE7, 0x0000],
    [0x2306, 0x0000],
    [0x0411, 0x0000],
    [0x2235, 0x0000],
    [0x212C, 0x0000],
    [0x0392, 0x0000],
    [0xD835, 0xDD05],
    [0xD835, 0xDD39],
    [0x02D8, 0x0000],
    [0x212C, 0x0000],
    [0x224E, 0x0000],
    [0x0427, 0x0000],
    [0x00A9, 0x0000],
    [0x00A9, 0x0000],
    [0x0106, 0x0000],
    [0x22D2, 0x0000],
    [0x2145, 0x0000],
    [0x212D, 0x0000],
    [0x010C, 0x0000],
    [0x00C7, 0x0000],
    [0x00C7, 0x0000],
    [0x0108, 0x0000],
    [0x2230, 0x0000],
    [0x010A, 0x0000],
    [0x00B8, 0x0000],
    [0x00B7, 0x0000],
    [0x212D, 0x0000],
    [0x03A7, 0x0000],
    [0x2299, 0x0000],
    [0x2296, 0x0000],
    [0x2295, 0x0000],
    [0x2297, 0x0000],
    [0x2232, 0x0000],
    [0x201D, 0x0000],
    [0x2019, 0x0000],
    [0x2237, 0x0000],
    [0x2A74, 0x0000],
    [0x2261, 0x0000],
    [0x222F, 0x0000],
    [0x222E, 0x0000],
    [0x2102, 0x0000],
    [0x2210, 0x0000],
    [0x2233, 0x0000],
    [0x2A2F, 0x0000],
    [0xD835, 0xDC9E],
    [0x22D3, 0x0000],
    [0x224D, 0x0000],
    [0x2145, 0x0000],
    [0x2911, 0x0000],
    [0x0402, 0x0000],
    [0x0405, 0x0000],
    [0x040F, 0x0000],
    [0x2021, 0x0000],
    [0x21A1, 0x0000],
    [0x2AE4, 0x0000],
    [0x010E, 0x0000],
    [0x0414, 0x0000],
    [0x2207, 0x0000],
    [0x0394, 0x0000],
    [0xD835, 0xDD07],
    [0x00B4, 0x0000],
    [0x02D9, 0x0000],
    [0x02DD, 0x0000],
    [0x0060, 0x0000],
    [0x02DC, 0x0000],
    [0x22C4, 0x0000],
    [0x2146, 0x0000],
    [0xD835, 0xDD3B],
    [0x00A8, 0x0000],
    [0x20DC, 0x0000],
    [0x2250, 0x0000],
    [0x222F, 0x0000],
    [0x00A8, 0x0000],
    [0x21D3, 0x0000],
    [0x21D0, 0x0000],
    [0x21D4, 0x0000],
    [0x2AE4, 0x0000],
    [0x27F8, 0x0000],
    [0x27FA, 0x0000],
    [0x27F9, 0x0000],
    [0x21D2, 0x0000],
    [0x22A8, 0x0000],
    [0x21D1, 0x0000],
    [0x21D5, 0x0000],
    [0x2225, 0x0000],
    [0x2193, 0x0000],
    [0x2913, 0x0000],
    [0x21F5, 0x0000],
    [0x0311, 0x0000],
    [0x2950, 0x0000],
    [0x295E, 0x0000],
    [0x21BD, 0x0000],
    [0x2956, 0x0000],
    [0x295F, 0x0000],
    [0x21C1, 0x0000],
    [0x2957, 0x0000],
    [0x22A4, 0x0000],
    [0x21A7, 0x0000],
    [0x21D3, 0x0000],
    [0xD835, 0xDC9F],
    [0x0110, 0x0000],
    [0x014A, 0x0000],
    [0x00D0, 0x0000],
    [0x00D0, 0x0000],
    [0x00C9, 0x0000],
    [0x00C9, 0x0000],
    [0x011A, 0x0000],
    [0x00CA, 0x0000],
    [0x00CA, 0x0000],
    [0x042D, 0x0000],
    [0x0116, 0x0000],
    [0xD835, 0xDD08],
    [0x00C8, 0x0000],
    [0x00C8, 0x0000],
    [0x2208, 0x0000],
    [0x0112, 0x0000],
    [0x25FB, 0x0000],
    [0x25AB, 0x0000],
    [0x0118, 0x0000],
    [0xD835, 0xDD3C],
    [0x0395, 0x0000],
    [0x2A75, 0x0000],
    [0x2242, 0x0000],
    [0x21CC, 0x0000],
    [0x2130, 0x0000],
    [0x2A73, 0x0000],
    [0x0397, 0x0000],
    [0x00CB, 0x0000],
    [0x00CB, 0x0000],
    [0x2203, 0x0000],
    [0x2147, 0x0000],
    [0x0424, 0x0000],
    [0xD835, 0xDD09],
    [0x25FC, 0x0000],
    [0x25AA, 0x0000],
    [0xD835, 0xDD3D],
    [0x2200, 0x0000],
    [0x2131, 0x0000],
    [0x2131, 0x0000],
    [0x0403, 0x0000],
    [0x003E, 0x0000],
    [0x003E, 0x0000],
    [0x0393, 0x0000],
    [0x03DC, 0x0000],
    [0x011E, 0x0000],
    [0x0122, 0x0000],
    [0x011C, 0x0000],
    [0x0413, 0x0000],
    [0x0120, 0x0000],
    [0xD835, 0xDD0A],
    [0x22D9, 0x0000],
    [0xD835, 0xDD3E],
    [0x2265, 0x0000],
    [0x22DB, 0x0000],
    [0x2267, 0x0000],
    [0x2AA2, 0x0000],
    [0x2277, 0x0000],
    [0x2A7E, 0x0000],
    [0x2273, 0x0000],
    [0xD835, 0xDCA2],
    [0x226B, 0x0000],
    [0x042A, 0x0000],
    [0x02C7, 0x0000],
    [0x005E, 0x0000],
    [0x0124, 0x0000],
    [0x210C, 0x0000],
    [0x210B, 0x0000],
    [0x210D, 0x0000],
    [0x2500, 0x0000],
    [0x210B, 0x0000],
    [0x0126, 0x0000],
    [0x224E, 0x0000],
    [0x224F, 0x0000],
    [0x0415, 0x0000],
    [0x0132, 0x0000],
    [0x0401, 0x0000],
    [0x00CD, 0x0000],
    [0x00CD, 0x0000],
    [0x00CE, 0x0000],
    [0x00CE, 0x0000],
    [0x0418, 0x0000],
    [0x0130, 0x0000],
    [0x2111, 0x0000],
    [0x00CC, 0x0000],
    [0x00CC, 0x0000],
    [0x2111, 0x0000],
    [0x012A, 0x0000],
    [0x2148, 0x0000],
    [0x21D2, 0x0000],
    [0x222C, 0x0000],
    [0x222B, 0x0000],
    [0x22C2, 0x0000],
    [0x2063, 0x0000],
    [0x2062, 0x0000],
    [0x012E, 0x0000],
    [0xD835, 0xDD40],
    [0x0399, 0x0000],
    [0x2110, 0x0000],
    [0x0128, 0x0000],
    [0x0406, 0x0000],
    [0x00CF, 0x0000],
    [0x00CF, 0x0000],
    [0x0134, 0x0000],
    [0x0419, 0x0000],
    [0xD835, 0xDD0D],
    [0xD835, 0xDD41],
    [0xD835, 0xDCA5],
    [0x0408, 0x0000],
    [0x0404, 0x0000],
    [0x0425, 0x0000],
    [0x040C, 0x0000],
    [0x039A, 0x0000],
    [0x0136, 0x0000],
    [0x041A, 0x0000],
    [0xD835, 0xDD0E],
    [0xD835, 0xDD42],
    [0xD835, 0xDCA6],
    [0x0409, 0x0000],
    [0x003C, 0x0000],
    [0x003C, 0x0000],
    [0x0139, 0x0000],
    [0x039B, 0x0000],
    [0x27EA, 0x0000],
    [0x2112, 0x0000],
    [0x219E, 0x0000],
    [0x013D, 0x0000],
    [0x013B, 0x0000],
    [0x041B, 0x0000],
    [0x27E8, 0x0000],
    [0x2190, 0x0000],
    [0x21E4, 0x0000],
    [0x21C6, 0x0000],
    [0x2308, 0x0000],
    [0x27E6, 0x0000],
    [0x2961, 0x0000],
    [0x21C3, 0x0000],
    [0x2959, 0x0000],
    [0x230A, 0x0000],
    [0x2194, 0x0000],
    [0x294E, 0x0000],
    [0x22A3, 0x0000],
    [0x21A4, 0x0000],
    [0x295A, 0x0000],
    [0x22B2, 0x0000],
    [0x29CF, 0x0000],
    [0x22B4, 0x0000],
    [0x2951, 0x0000],
    [0x2960, 0x0000],
    [0x21BF, 0x0000],
    [0x2958, 0x0000],
    [0x21BC, 0x0000],
    [0x2952, 0x0000],
    [0x21D0, 0x0000],
    [0x21D4, 0x0000],
    [0x22DA, 0x0000],
    [0x2266, 0x0000],
    [0x2276, 0x0000],
    [0x2AA1, 0x0000],
    [0x2A7D, 0x0000],
    [0x2272, 0x0000],
    [0xD835, 0xDD0F],
    [0x22D8, 0x0000],
    [0x21DA, 0x0000],
    [0x013F, 0x0000],
    [0x27F5, 0x0000],
    [0x27F7, 0x0000],
    [0x27F6, 0x0000],
    [0x27F8, 0x0000],
    [0x27FA, 0x0000],
    [0x27F9, 0x0000],
    [0xD835, 0xDD43],
    [0x2199, 0x0000],
    [0x2198, 0x0000],
    [0x2112, 0x0000],
    [0x21B0, 0x0000],
    [0x0141, 0x0000],
    [0x226A, 0x0000],
    [0x2905, 0x0000],
    [0x041C, 0x0000],
    [0x205F, 0x0000],
    [0x2133, 0x0000],
    [0xD835, 0xDD10],
    [0x2213, 0x0000],
    [0xD835, 0xDD44],
    [0x2133, 0x0000],
    [0x039C, 0x0000],
    [0x040A, 0x0000],
    [0x0143, 0x0000],
    [0x0147, 0x0000],
    [0x0145, 0x0000],
    [0x041D, 0x0000],
    [0x200B, 0x0000],
    [0x200B, 0x0000],
    [0x200B, 0x0000],
    [0x200B, 0x0000],
    [0x226B, 0x0000],
    [0x226A, 0x0000],
    [0x000A, 0x0000],
    [0xD835, 0xDD11],
    [0x2060, 0x0000],
    [0x00A0, 0x0000],
    [0x2115, 0x0000],
    [0x2AEC, 0x0000],
    [0x2262, 0x0000],
    [0x226D, 0x0000],
    [0x2226, 0x0000],
    [0x2209, 0x0000],
    [0x2260, 0x0000],
    [0x2242, 0x0338],
    [0x2204, 0x0000],
    [0x226F, 0x0000],
    [0x2271, 0x0000],
    [0x2267, 0x0338],
    [0x226B, 0x0338],
    [0x2279, 0x0000],
    [0x2A7E, 0x0338],
    [0x2275, 0x0000],
    [0x224E, 0x0338],
    [0x224F, 0x0338],
    [0x22EA, 0x0000],
    [0x29CF, 0x0338],
    [0x22EC, 0x0000],
    [0x226E, 0x0000],
    [0x2270, 0x0000],
    [0x2278, 0x0000],
    [0x226A, 0x0338],
    [0x2A7D, 0x0338],
    [0x2274, 0x0000],
    [0x2AA2, 0x0338],
    [0x2AA1, 0x0338],
    [0x2280, 0x0000],
    [0x2AAF, 0x0338],
    [0x22E0, 0x0000],
    [0x220C, 0x0000],
    [0x22EB, 0x0000],
    [0x29D0, 0x0338],
    [0x22ED, 0x0000],
    [0x228F, 0x0338],
    [0x22E2, 0x0000],
    [0x2290, 0x0338],
    [0x22E3, 0x0000],
    [0x2282, 0x20D2],
    [0x2288, 0x0000],
    [0x2281, 0x0000],
    [0x2AB0, 0x0338],
    [0x22E1, 0x0000],
    [0x227F, 0x0338],
    [0x2283, 0x20D2],
    [0x2289, 0x0000],
    [0x2241, 0x0000],
    [0x2244, 0x0000],
    [0x2247, 0x0000],
    [0x2249, 0x0000],
    [0x2224, 0x0000],
    [0xD835, 0xDCA9],
    [0x00D1, 0x0000],
    [0x00D1, 0x0000],
    [0x039D, 0x0000],
    [0x0152, 0x0000],
    [0x00D3, 0x0000],
    [0x00D3, 0x0000],
    [0x00D4, 0x0000],
    [0x00D4, 0x0000],
    [0x041E, 0x0000],
    [0x0150, 0x0000],
    [0xD835, 0xDD12],
    [0x00D2, 0x0000],
    [0x00D2, 0x0000],
    [0x014C, 0x0000],
    [0x03A9, 0x0000],
    [0x039F, 0x0000],
    [0xD835, 0xDD46],
    [0x201C, 0x0000],
    [0x2018, 0x0000],
    [0x2A54, 0x0000],
    [0xD835, 0xDCAA],
    [0x00D8, 0x0000],
    [0x00D8, 0x0000],
    [0x00D5, 0x0000],
    [0x00D5, 0x0000],
    [0x2A37, 0x0000],
    [0x00D6, 0x0000],
    [0x00D6, 0x0000],
    [0x203E, 0x0000],
    [0x23DE, 0x0000],
    [0x23B4, 0x0000],
    [0x23DC, 0x0000],
    [0x2202, 0x0000],
    [0x041F, 0x0000],
    [0xD835, 0xDD13],
    [0x03A6, 0x0000],
    [0x03A0, 0x0000],
    [0x00B1, 0x0000],
    [0x210C, 0x0000],
    [0x2119, 0x0000],
    [0x2ABB, 0x0000],
    [0x227A, 0x0000],
    [0x2AAF, 0x0000],
    [0x227C, 0x0000],
    [0x227E, 0x0000],
    [0x2033, 0x0000],
    [0x220F, 0x0000],
    [0x2237, 0x0000],
    [0x221D, 0x0000],
    [0xD835, 0xDCAB],
    [0x03A8, 0x0000],
    [0x0022, 0x0000],
    [0x0022, 0x0000],
    [0xD835, 0xDD14],
    [0x211A, 0x0000],
    [0xD835, 0xDCAC],
    [0x2910, 0x0000],
    [0x00AE, 0x0000],
    [0x00AE, 0x0000],
    [0x0154, 0x0000],
    [0x27EB, 0x0000],
    [0x21A0, 0x0000],
    [0x2916, 0x0000],
    [0x0158, 0x0000],
    [0x0156, 0x0000],
    [0x0420, 0x0000],
    [0x211C, 0x0000],
    [0x220B, 0x0000],
    [0x21CB, 0x0000],
    [0x296F, 0x0000],
    [0x211C, 0x0000],
    [0x03A1, 0x0000],
    [0x27E9, 0x0000],
    [0x2192, 0x0000],
    [0x21E5, 0x0000],
    [0x21C4, 0x0000],
    [0x2309, 0x0000],
    [0x27E7, 0x0000],
    [0x295D, 0x0000],
    [0x21C2, 0x0000],
    [0x2955, 0x0000],
    [0x230B, 0x0000],
    [0x22A2, 0x0000],
    [0x21A6, 0x0000],
    [0x295B, 0x0000],
    [0x22B3, 0x0000],
    [0x29D0, 0x0000],
    [0x22B5, 0x0000],
    [0x294F, 0x0000],
    [0x295C, 0x0000],
    [0x21BE, 0x0000],
    [0x2954, 0x0000],
    [0x21C0, 0x0000],
    [0x2953, 0x0000],
    [0x21D2, 0x0000],
    [0x211D, 0x0000],
    [0x2970, 0x0000],
    [0x21DB, 0x0000],
    [0x211B, 0x0000],
    [0x21B1, 0x0000],
    [0x29F4, 0x0000],
    [0x0429, 0x0000],
    [0x0428, 0x0000],
    [0x042C, 0x0000],
    [0x015A, 0x0000],
    [0x2ABC, 0x0000],
    [0x0160, 0x0000],
    [0x015E, 0x0000],
    [0x015C, 0x0000],
    [0x0421, 0x0000],
    [0xD835, 0xDD16],
    [0x2193, 0x0000],
    [0x2190, 0x0000],
    [0x2192, 0x0000],
    [0x2191, 0x0000],
    [0x03A3, 0x0000],
    [0x2218, 0x0000],
    [0xD835, 0xDD4A],
    [0x221A, 0x0000],
    [0x25A1, 0x0000],
    [0x2293, 0x0000],
    [0x228F, 0x0000],
    [0x2291, 0x0000],
    [0x2290, 0x0000],
    [0x2292, 0x0000],
    [0x2294, 0x0000],
    [0xD835, 0xDCAE],
    [0x22C6, 0x0000],
    [0x22D0, 0x0000],
    [0x22D0, 0x0000],
    [0x2286, 0x0000],
    [0x227B, 0x0000],
    [0x2AB0, 0x0000],
    [0x227D, 0x0000],
    [0x227F, 0x0000],
    [0x220B, 0x0000],
    [0x2211, 0x0000],
    [0x22D1, 0x0000],
    [0x2283, 0x0000],
    [0x2287, 0x0000],
    [0x22D1, 0x0000],
    [0x00DE, 0x0000],
    [0x00DE, 0x0000],
    [0x2122, 0x0000],
    [0x040B, 0x0000],
    [0x0426, 0x0000],
    [0x0009, 0x0000],
    [0x03A4, 0x0000],
    [0x0164, 0x0000],
    [0x0162, 0x0000],
    [0x0422, 0x0000],
    [0xD835, 0xDD17],
    [0x2234, 0x0000],
    [0x0398, 0x0000],
    [0x205F, 0x200A],
    [0x2009, 0x0000],
    [0x223C, 0x0000],
    [0x2243, 0x0000],
    [0x2245, 0x0000],
    [0x2248, 0x0000],
    [0xD835, 0xDD4B],
    [0x20DB, 0x0000],
    [0xD835, 0xDCAF],
    [0x0166, 0x0000],
    [0x00DA, 0x0000],
    [0x00DA, 0x0000],
    [0x219F, 0x0000],
    [0x2949, 0x0000],
    [0x040E, 0x0000],
    [0x016C, 0x0000],
    [0x00DB, 0x0000],
    [0x00DB, 0x0000],
    [0x0423, 0x0000],
    [0x0170, 0x0000],
    [0xD835, 0xDD18],
    [0x00D9, 0x0000],
    [0x00D9, 0x0000],
    [0x016A, 0x0000],
    [0x005F, 0x0000],
    [0x23DF, 0x0000],
    [0x23B5, 0x0000],
    [0x23DD, 0x0000],
    [0x22C3, 0x0000],
    [0x228E, 0x0000],
    [0x0172, 0x0000],
    [0xD835, 0xDD4C],
    [0x2191, 0x0000],
    [0x2912, 0x0000],
    [0x21C5, 0x0000],
    [0x2195, 0x0000],
    [0x296E, 0x0000],
    [0x22A5, 0x0000],
    [0x21A5, 0x0000],
    [0x21D1, 0x0000],
    [0x21D5, 0x0000],
    [0x2196, 0x0000],
    [0x2197, 0x0000],
    [0x03D2, 0x0000],
    [0x03A5, 0x0000],
    [0x016E, 0x0000],
    [0xD835, 0xDCB0],
    [0x0168, 0x0000],
    [0x00DC, 0x0000],
    [0x00DC, 0x0000],
    [0x22AB, 0x0000],
    [0x2AEB, 0x0000],
    [0x0412, 0x0000],
    [0x22A9, 0x0000],
    [0x2AE6, 0x0000],
    [0x22C1, 0x0000],
    [0x2016, 0x0000],
    [0x2016, 0x0000],
    [0x2223, 0x0000],
    [0x007C, 0x0000],
    [0x2758, 0x0000],
    [0x2240, 0x0000],
    [0x200A, 0x0000],
    [0xD835, 0xDD19],
    [0xD835, 0xDD4D],
    [0xD835, 0xDCB1],
    [0x22AA, 0x0000],
    [0x0174, 0x0000],
    [0x22C0, 0x0000],
    [0xD835, 0xDD1A],
    [0xD835, 0xDD4E],
    [0xD835, 0xDCB2],
    [0xD835, 0xDD1B],
    [0x039E, 0x0000],
    [0xD835, 0xDD4F],
    [0xD835, 0xDCB3],
    [0x042F, 0x0000],
    [0x0407, 0x0000],
    [0x042E, 0x0000],
    [0x00DD, 0x0000],
    [0x00DD, 0x0000],
    [0x0176, 0x0000],
    [0x042B, 0x0000],
    [0xD835, 0xDD1C],
    [0xD835, 0xDD50],
    [0xD835, 0xDCB4],
    [0x0178, 0x0000],
    [0x0416, 0x0000],
    [0x0179, 0x0000],
    [0x017D, 0x0000],
    [0x0417, 0x0000],
    [0x017B, 0x0000],
    [0x200B, 0x0000],
    [0x0396, 0x0000],
    [0x2128, 0x0000],
    [0x2124, 0x0000],
    [0xD835, 0xDCB5],
    [0x00E1, 0x0000],
    [0x00E1, 0x0000],
    [0x0103, 0x0000],
    [0x223E, 0x0000],
    [0x223E, 0x0333],
    [0x223F, 0x0000],
    [0x00E2, 0x0000],
    [0x00E2, 0x0000],
    [0x00B4, 0x0000],
    [0x00B4, 0x0000],
    [0x0430, 0x0000],
    [0x00E6, 0x0000],
    [0x00E6, 0x0000],
    [0x2061, 0x0000],
    [0xD835, 0xDD1E],
    [0x00E0, 0x0000],
    [0x00E0, 0x0000],
    [0x2135, 0x0000],
    [0x2135, 0x0000],
    [0x03B1, 0x0000],
    [0x0101, 0x0000],
    [0x2A3F, 0x0000],
    [0x0026, 0x0000],
    [0x0026, 0x0000],
    [0x2227, 0x0000],
    [0x2A55, 0x0000],
    [0x2A5C, 0x0000],
    [0x2A58, 0x0000],
    [0x2A5A, 0x0000],
    [0x2220, 0x0000],
    [0x29A4, 0x0000],
    [0x2220, 0x0000],
    [0x2221, 0x0000],
    [0x29A8, 0x0000],
    [0x29A9, 0x0000],
    [0x29AA, 0x0000],
    [0x29AB, 0x0000],
    [0x29AC, 0x0000],
    [0x29AD, 0x0000],
    [0x29AE, 0x0000],
    [0x29AF, 0x0000],
    [0x221F, 0x0000],
    [0x22BE, 0x0000],
    [0x299D, 0x0000],
    [0x2222, 0x0000],
    [0x00C5, 0x0000],
    [0x237C, 0x0000],
    [0x0105, 0x0000],
    [0xD835, 0xDD52],
    [0x2248, 0x0000],
    [0x2A70, 0x0000],
    [0x2A6F, 0x0000],
    [0x224A, 0x0000],
    [0x224B, 0x0000],
    [0x0027, 0x0000],
    [0x2248, 0x0000],
    [0x224A, 0x0000],
    [0x00E5, 0x0000],
    [0x00E5, 0x0000],
    [0xD835, 0xDCB6],
    [0x002A, 0x0000],
    [0x2248, 0x0000],
    [0x224D, 0x0000],
    [0x00E3, 0x0000],
    [0x00E3, 0x0000],
    [0x00E4, 0x0000],
    [0x00E4, 0x0000],
    [0x2233, 0x0000],
    [0x2A11, 0x0000],
    [0x2AED, 0x0000],
    [0x224C, 0x0000],
    [0x03F6, 0x0000],
    [0x2035, 0x0000],
    [0x223D, 0x0000],
    [0x22CD, 0x0000],
    [0x22BD, 0x0000],
    [0x2305, 0x0000],
    [0x2305, 0x0000],
    [0x23B5, 0x0000],
    [0x23B6, 0x0000],
    [0x224C, 0x0000],
    [0x0431, 0x0000],
    [0x201E, 0x0000],
    [0x2235, 0x0000],
    [0x2235, 0x0000],
    [0x29B0, 0x0000],
    [0x03F6, 0x0000],
    [0x212C, 0x0000],
    [0x03B2, 0x0000],
    [0x2136, 0x0000],
    [0x226C, 0x0000],
    [0xD835, 0xDD1F],
    [0x22C2, 0x0000],
    [0x25EF, 0x0000],
    [0x22C3, 0x0000],
    [0x2A00, 0x0000],
    [0x2A01, 0x0000],
    [0x2A02, 0x0000],
    [0x2A06, 0x0000],
    [0x2605, 0x0000],
    [0x25BD, 0x0000],
    [0x25B3, 0x0000],
    [0x2A04, 0x0000],
    [0x22C1, 0x0000],
    [0x22C0, 0x0000],
    [0x290D, 0x0000],
    [0x29EB, 0x0000],
    [0x25AA, 0x0000],
    [0x25B4, 0x0000],
    [0x25BE, 0x0000],
    [0x25C2, 0x0000],
    [0x25B8, 0x0000],
    [0x2423, 0x0000],
    [0x2592, 0x0000],
    [0x2591, 0x0000],
    [0x2593, 0x0000],
    [0x2588, 0x0000],
    [0x003D, 0x20E5],
    [0x2261, 0x20E5],
    [0x2310, 0x0000],
    [0xD835, 0xDD53],
    [0x22A5, 0x0000],
    [0x22A5, 0x0000],
    [0x22C8, 0x0000],
    [0x2557, 0x0000],
    [0x2554, 0x0000],
    [0x2556, 0x0000],
    [0x2553, 0x0000],
    [0x2550, 0x0000],
    [0x2566, 0x0000],
    [0x2569, 0x0000],
    [0x2564, 0x0000],
    [0x2567, 0x0000],
    [0x255D, 0x0000],
    [0x255A, 0x0000],
    [0x255C, 0x0000],
    [0x2559, 0x0000],
    [0x2551, 0x0000],
    [0x256C, 0x0000],
    [0x2563, 0x0000],
    [0x2560, 0x0000],
    [0x256B, 0x0000],
    [0x2562, 0x0000],
    [0x255F, 0x0000],
    [0x29C9, 0x0000],
    [0x2555, 0x0000],
    [0x2552, 0x0000],
    [0x2510, 0x0000],
    [0x250C, 0x0000],
    [0x2500, 0x0000],
    [0x2565, 0x0000],
    [0x2568, 0x0000],
    [0x252C, 0x0000],
    [0x2534, 0x0000],
    [0x229F, 0x0000],
    [0x229E, 0x0000],
    [0x22A0, 0x0000],
    [0x255B, 0x0000],
    [0x2558, 0x0000],
    [0x2518, 0x0000],
    [0x2514, 0x0000],
    [0x2502, 0x0000],
    [0x256A, 0x0000],
    [0x2561, 0x0000],
    [0x255E, 0x0000],
    [0x253C, 0x0000],
    [0x2524, 0x0000],
    [0x251C, 0x0000],
    [0x2035, 0x0000],
    [0x02D8, 0x0000],
    [0x00A6, 0x0000],
    [0x00A6, 0x0000],
    [0xD835, 0xDCB7],
    [0x204F, 0x0000],
    [0x223D, 0x0000],
    [0x22CD, 0x0000],
    [0x005C, 0x0000],
    [0x29C5, 0x0000],
    [0x27C8, 0x0000],
    [0x2022, 0x0000],
    [0x2022, 0x0000],
    [0x224E, 0x0000],
    [0x2AAE, 0x0000],
    [0x224F, 0x0000],
    [0x224F, 0x0000],
    [0x0107, 0x0000],
    [0x2229, 0x0000],
    [0x2A44, 0x0000],
    [0x2A49, 0x0000],
    [0x2A4B, 0x0000],
    [0x2A47, 0x0000],
    [0x2A40, 0x0000],
    [0x2229, 0xFE00],
    [0x2041, 0x0000],
    [0x02C7, 0x0000],
    [0x2A4D, 0x0000],
    [0x010D, 0x0000],
    [0x00E7, 0x0000],
    [0x00E7, 0x0000],
    [0x0109, 0x0000],
    [0x2A4C, 0x0000],
    [0x2A50, 0x0000],
    [0x010B, 0x0000],
    [0x00B8, 0x0000],
    [0x00B8, 0x0000],
    [0x29B2, 0x0000],
    [0x00A2, 0x0000],
    [0x00A2, 0x0000],
    [0x00B7, 0x0000],
    [0xD835, 0xDD20],
    [0x0447, 0x0000],
    [0x2713, 0x0000],
    [0x2713, 0x0000],
    [0x03C7, 0x0000],
    [0x25CB, 0x0000],
    [0x29C3, 0x0000],
    [0x02C6, 0x0000],
    [0x2257, 0x0000],
    [0x21BA, 0x0000],
    [0x21BB, 0x0000],
    [0x00AE, 0x0000],
    [0x24C8, 0x0000],
    [0x229B, 0x0000],
    [0x229A, 0x0000],
    [0x229D, 0x0000],
    [0x2257, 0x0000],
    [0x2A10, 0x0000],
    [0x2AEF, 0x0000],
    [0x29C2, 0x0000],
    [0x2663, 0x0000],
    [0x2663, 0x0000],
    [0x003A, 0x0000],
    [0x2254, 0x0000],
    [0x2254, 0x0000],
    [0x002C, 0x0000],
    [0x0040, 0x0000],
    [0x2201, 0x0000],
    [0x2218, 0x0000],
    [0x2201, 0x0000],
    [0x2102, 0x0000],
    [0x2245, 0x0000],
    [0x2A6D, 0x0000],
    [0x222E, 0x0000],
    [0xD835, 0xDD54],
    [0x2210, 0x0000],
    [0x00A9, 0x0000],
    [0x00A9, 0x0000],
    [0x2117, 0x0000],
    [0x21B5, 0x0000],
    [0x2717, 0x0000],
    [0xD835, 0xDCB8],
    [0x2ACF, 0x0000],
    [0x2AD1, 0x0000],
    [0x2AD0, 0x0000],
    [0x2AD2, 0x0000],
    [0x22EF, 0x0000],
    [0x2938, 0x0000],
    [0x2935, 0x0000],
    [0x22DE, 0x0000],
    [0x22DF, 0x0000],
    [0x21B6, 0x0000],
    [0x293D, 0x0000],
    [0x222A, 0x0000],
    [0x2A48, 0x0000],
    [0x2A46, 0x0000],
    [0x2A4A, 0x0000],
    [0x228D, 0x0000],
    [0x2A45, 0x0000],
    [0x222A, 0xFE00],
    [0x21B7, 0x0000],
    [0x293C, 0x0000],
    [0x22DE, 0x0000],
    [0x22DF, 0x0000],
    [0x22CE, 0x0000],
    [0x22CF, 0x0000],
    [0x00A4, 0x0000],
    [0x00A4, 0x0000],
    [0x21B6, 0x0000],
    [0x21B7, 0x0000],
    [0x22CE, 0x0000],
    [0x22CF, 0x0000],
    [0x2232, 0x0000],
    [0x2231, 0x0000],
    [0x232D, 0x0000],
    [0x21D3, 0x0000],
    [0x2965, 0x0000],
    [0x2020, 0x0000],
    [0x2138, 0x0000],
    [0x2193, 0x0000],
    [0x2010, 0x0000],
    [0x22A3, 0x0000],
    [0x290F, 0x0000],
    [0x02DD, 0x0000],
    [0x010F, 0x0000],
    [0x0434, 0x0000],
    [0x2146, 0x0000],
    [0x2021, 0x0000],
    [0x21CA, 0x0000],
    [0x2A77, 0x0000],
    [0x00B0, 0x0000],
    [0x00B0, 0x0000],
    [0x03B4, 0x0000],
    [0x29B1, 0x0000],
    [0x297F, 0x0000],
    [0xD835, 0xDD21],
    [0x21C3, 0x0000],
    [0x21C2, 0x0000],
    [0x22C4, 0x0000],
    [0x22C4, 0x0000],
    [0x2666, 0x0000],
    [0x2666, 0x0000],
    [0x00A8, 0x0000],
    [0x03DD, 0x0000],
    [0x22F2, 0x0000],
    [0x00F7, 0x0000],
    [0x00F7, 0x0000],
    [0x00F7, 0x0000],
    [0x22C7, 0x0000],
    [0x22C7, 0x0000],
    [0x0452, 0x0000],
    [0x231E, 0x0000],
    [0x230D, 0x0000],
    [0x0024, 0x0000],
    [0xD835, 0xDD55],
    [0x02D9, 0x0000],
    [0x2250, 0x0000],
    [0x2251, 0x0000],
    [0x2238, 0x0000],
    [0x2214, 0x0000],
    [0x22A1, 0x0000],
    [0x2306, 0x0000],
    [0x2193, 0x0000],
    [0x21CA, 0x0000],
    [0x21C3, 0x0000],
    [0x21C2, 0x0000],
    [0x2910, 0x0000],
    [0x231F, 0x0000],
    [0x230C, 0x0000],
    [0xD835, 0xDCB9],
    [0x0455, 0x0000],
    [0x29F6, 0x0000],
    [0x0111, 0x0000],
    [0x22F1, 0x0000],
    [0x25BF, 0x0000],
    [0x25BE, 0x0000],
    [0x21F5, 0x0000],
    [0x296F, 0x0000],
    [0x29A6, 0x0000],
    [0x045F, 0x0000],
    [0x27FF, 0x0000],
    [0x2A77, 0x0000],
    [0x2251, 0x0000],
    [0x00E9, 0x0000],
    [0x00E9, 0x0000],
    [0x2A6E, 0x0000],
    [0x011B, 0x0000],
    [0x2256, 0x0000],
    [0x00EA, 0x0000],
    [0x00EA, 0x0000],
    [0x2255, 0x0000],
    [0x044D, 0x0000],
    [0x0117, 0x0000],
    [0x2147, 0x0000],
    [0x2252, 0x0000],
    [0xD835, 0xDD22],
    [0x2A9A, 0x0000],
    [0x00E8, 0x0000],
    [0x00E8, 0x0000],
    [0x2A96, 0x0000],
    [0x2A98, 0x0000],
    [0x2A99, 0x0000],
    [0x23E7, 0x0000],
    [0x2113, 0x0000],
    [0x2A95, 0x0000],
    [0x2A97, 0x0000],
    [0x0113, 0x0000],
    [0x2205, 0x0000],
    [0x2205, 0x0000],
    [0x2205, 0x0000],
    [0x2004, 0x0000],
    [0x2005, 0x0000],
    [0x2003, 0x0000],
    [0x014B, 0x0000],
    [0x2002, 0x0000],
    [0x0119, 0x0000],
    [0xD835, 0xDD56],
    [0x22D5, 0x0000],
    [0x29E3, 0x0000],
    [0x2A71, 0x0000],
    [0x03B5, 0x0000],
    [0x03B5, 0x0000],
    [0x03F5, 0x0000],
    [0x2256, 0x0000],
    [0x2255, 0x0000],
    [0x2242, 0x0000],
    [0x2A96, 0x0000],
    [0x2A95, 0x0000],
    [0x003D, 0x0000],
    [0x225F, 0x0000],
    [0x2261, 0x0000],
    [0x2A78, 0x0000],
    [0x29E5, 0x0000],
    [0x2253, 0x0000],
    [0x2971, 0x0000],
    [0x212F, 0x0000],
    [0x2250, 0x0000],
    [0x2242, 0x0000],
    [0x03B7, 0x0000],
    [0x00F0, 0x0000],
    [0x00F0, 0x0000],
    [0x00EB, 0x0000],
    [0x00EB, 0x0000],
    [0x20AC, 0x0000],
    [0x0021, 0x0000],
    [0x2203, 0x0000],
    [0x2130, 0x0000],
    [0x2147, 0x0000],
    [0x2252, 0x0000],
    [0x0444, 0x0000],
    [0x2640, 0x0000],
    [0xFB03, 0x0000],
    [0xFB00, 0x0000],
    [0xFB04, 0x0000],
    [0xD835, 0xDD23],
    [0xFB01, 0x0000],
    [0x0066, 0x006A],
    [0x266D, 0x0000],
    [0xFB02, 0x0000],
    [0x25B1, 0x0000],
    [0x0192, 0x0000],
    [0xD835, 0xDD57],
    [0x2200, 0x0000],
    [0x22D4, 0x0000],
    [0x2AD9, 0x0000],
    [0x2A0D, 0x0000],
    [0x00BD, 0x0000],
    [0x00BD, 0x0000],
    [0x2153, 0x0000],
    [0x00BC, 0x0000],
    [0x00BC, 0x0000],
    [0x2155, 0x0000],
    [0x2159, 0x0000],
    [0x215B, 0x0000],
    [0x2154, 0x0000],
    [0x2156, 0x0000],
    [0x00BE, 0x0000],
    [0x00BE, 0x0000],
    [0x2157, 0x0000],
    [0x215C, 0x0000],
    [0x2158, 0x0000],
    [0x215A, 0x0000],
    [0x215D, 0x0000],
    [0x215E, 0x0000],
    [0x2044, 0x0000],
    [0x2322, 0x0000],
    [0xD835, 0xDCBB],
    [0x2267, 0x0000],
    [0x2A8C, 0x0000],
    [0x01F5, 0x0000],
    [0x03B3, 0x0000],
    [0x03DD, 0x0000],
    [0x2A86, 0x0000],
    [0x011F, 0x0000],
    [0x011D, 0x0000],
    [0x0433, 0x0000],
    [0x0121, 0x0000],
    [0x2265, 0x0000],
    [0x22DB, 0x0000],
    [0x2265, 0x0000],
    [0x2267, 0x0000],
    [0x2A7E, 0x0000],
    [0x2A7E, 0x0000],
    [0x2AA9, 0x0000],
    [0x2A80, 0x0000],
    [0x2A82, 0x0000],
    [0x2A84, 0x0000],
    [0x22DB, 0xFE00],
    [0x2A94, 0x0000],
    [0xD835, 0xDD24],
    [0x226B, 0x0000],
    [0x22D9, 0x0000],
    [0x2137, 0x0000],
    [0x0453, 0x0000],
    [0x2277, 0x0000],
    [0x2A92, 0x0000],
    [0x2AA5, 0x0000],
    [0x2AA4, 0x0000],
    [0x2269, 0x0000],
    [0x2A8A, 0x0000],
    [0x2A8A, 0x0000],
    [0x2A88, 0x0000],
    [0x2A88, 0x0000],
    [0x2269, 0x0000],
    [0x22E7, 0x0000],
    [0xD835, 0xDD58],
    [0x0060, 0x0000],
    [0x210A, 0x0000],
    [0x2273, 0x0000],
    [0x2A8E, 0x0000],
    [0x2A90, 0x0000],
    [0x003E, 0x0000],
    [0x003E, 0x0000],
    [0x2AA7, 0x0000],
    [0x2A7A, 0x0000],
    [0x22D7, 0x0000],
    [0x2995, 0x0000],
    [0x2A7C, 0x0000],
    [0x2A86, 0x0000],
    [0x2978, 0x0000],
    [0x22D7, 0x0000],
    [0x22DB, 0x0000],
    [0x2A8C, 0x0000],
    [0x2277, 0x0000],
    [0x2273, 0x0000],
    [0x2269, 0xFE00],
    [0x2269, 0xFE00],
    [0x21D4, 0x0000],
    [0x200A, 0x0000],
    [0x00BD, 0x0000],
    [0x210B, 0x0000],
    [0x044A, 0x0000],
    [0x2194, 0x0000],
    [0x2948, 0x0000],
    [0x21AD, 0x0000],
    [0x210F, 0x0000],
    [0x0125, 0x0000],
    [0x2665, 0x0000],
    [0x2665, 0x0000],
    [0x2026, 0x0000],
    [0x22B9, 0x0000],
    [0xD835, 0xDD25],
    [0x2925, 0x0000],
    [0x2926, 0x0000],
    [0x21FF, 0x0000],
    [0x223B, 0x0000],
    [0x21A9, 0x0000],
    [0x21AA, 0x0000],
    [0xD835, 0xDD59],
    [0x2015, 0x0000],
    [0xD835, 0xDCBD],
    [0x210F, 0x0000],
    [0x0127, 0x0000],
    [0x2043, 0x0000],
    [0x2010, 0x0000],
    [0x00ED, 0x0000],
    [0x00ED, 0x0000],
    [0x2063, 0x0000],
    [0x00EE, 0x0000],
    [0x00EE, 0x0000],
    [0x0438, 0x0000],
    [0x0435, 0x0000],
    [0x00A1, 0x0000],
    [0x00A1, 0x0000],
    [0x21D4, 0x0000],
    [0xD835, 0xDD26],
    [0x00EC, 0x0000],
    [0x00EC, 0x0000],
    [0x2148, 0x0000],
    [0x2A0C, 0x0000],
    [0x222D, 0x0000],
    [0x29DC, 0x0000],
    [0x2129, 0x0000],
    [0x0133, 0x0000],
    [0x012B, 0x0000],
    [0x2111, 0x0000],
    [0x2110, 0x0000],
    [0x2111, 0x0000],
    [0x0131, 0x0000],
    [0x22B7, 0x0000],
    [0x01B5, 0x0000],
    [0x2208, 0x0000],
    [0x2105, 0x0000],
    [0x221E, 0x0000],
    [0x29DD, 0x0000],
    [0x0131, 0x0000],
    [0x222B, 0x0000],
    [0x22BA, 0x0000],
    [0x2124, 0x0000],
    [0x22BA, 0x0000],
    [0x2A17, 0x0000],
    [0x2A3C, 0x0000],
    [0x0451, 0x0000],
    [0x012F, 0x0000],
    [0xD835, 0xDD5A],
    [0x03B9, 0x0000],
    [0x2A3C, 0x0000],
    [0x00BF, 0x0000],
    [0x00BF, 0x0000],
    [0xD835, 0xDCBE],
    [0x2208, 0x0000],
    [0x22F9, 0x0000],
    [0x22F5, 0x0000],
    [0x22F4, 0x0000],
    [0x22F3, 0x0000],
    [0x2208, 0x0000],
    [0x2062, 0x0000],
    [0x0129, 0x0000],
    [0x0456, 0x0000],
    [0x00EF, 0x0000],
    [0x00EF, 0x0000],
    [0x0135, 0x0000],
    [0x0439, 0x0000],
    [0xD835, 0xDD27],
    [0x0237, 0x0000],
    [0xD835, 0xDD5B],
    [0xD835, 0xDCBF],
    [0x0458, 0x0000],
    [0x0454, 0x0000],
    [0x03BA, 0x0000],
    [0x03F0, 0x0000],
    [0x0137, 0x0000],
    [0x043A, 0x0000],
    [0xD835, 0xDD28],
    [0x0138, 0x0000],
    [0x0445, 0x0000],
    [0x045C, 0x0000],
    [0xD835, 0xDD5C],
    [0xD835, 0xDCC0],
    [0x21DA, 0x0000],
    [0x21D0, 0x0000],
    [0x291B, 0x0000],
    [0x290E, 0x0000],
    [0x2266, 0x0000],
    [0x2A8B, 0x0000],
    [0x2962, 0x0000],
    [0x013A, 0x0000],
    [0x29B4, 0x0000],
    [0x2112, 0x0000],
    [0x03BB, 0x0000],
    [0x27E8, 0x0000],
    [0x2991, 0x0000],
    [0x27E8, 0x0000],
    [0x2A85, 0x0000],
    [0x00AB, 0x0000],
    [0x00AB, 0x0000],
    [0x2190, 0x0000],
    [0x21E4, 0x0000],
    [0x291F, 0x0000],
    [0x291D, 0x0000],
    [0x21A9, 0x0000],
    [0x21AB, 0x0000],
    [0x2939, 0x0000],
    [0x2973, 0x0000],
    [0x21A2, 0x0000],
    [0x2AAB, 0x0000],
    [0x2919, 0x0000],
    [0x2AAD, 0x0000],
    [0x2AAD, 0xFE00],
    [0x290C, 0x0000],
    [0x2772, 0x0000],
    [0x007B, 0x0000],
    [0x005B, 0x0000],
    [0x298B, 0x0000],
    [0x298F, 0x0000],
    [0x298D, 0x0000],
    [0x013E, 0x0000],
    [0x013C, 0x0000],
    [0x2308, 0x0000],
    [0x007B, 0x0000],
    [0x043B, 0x0000],
    [0x2936, 0x0000],
    [0x201C, 0x0000],
    [0x201E, 0x0000],
    [0x2967, 0x0000],
    [0x294B, 0x0000],
    [0x21B2, 0x0000],
    [0x2264, 0x0000],
    [0x2190, 0x0000],
    [0x21A2, 0x0000],
    [0x21BD, 0x0000],
    [0x21BC, 0x0000],
    [0x21C7, 0x0000],
    [0x2194, 0x0000],
    [0x21C6, 0x0000],
    [0x21CB, 0x0000],
    [0x21AD, 0x0000],
    [0x22CB, 0x0000],
    [0x22DA, 0x0000],
    [0x2264, 0x0000],
    [0x2266, 0x0000],
    [0x2A7D, 0x0000],
    [0x2A7D, 0x0000],
    [0x2AA8, 0x0000],
    [0x2A7F, 0x0000],
    [0x2A81, 0x0000],
    [0x2A83, 0x0000],
    [0x22DA, 0xFE00],
    [0x2A93, 0x0000],
    [0x2A85, 0x0000],
    [0x22D6, 0x0000],
    [0x22DA, 0x0000],
    [0x2A8B, 0x0000],
    [0x2276, 0x0000],
    [0x2272, 0x0000],
    [0x297C, 0x0000],
    [0x230A, 0x0000],
    [0xD835, 0xDD29],
    [0x2276, 0x0000],
    [0x2A91, 0x0000],
    [0x21BD, 0x0000],
    [0x21BC, 0x0000],
    [0x296A, 0x0000],
    [0x2584, 0x0000],
    [0x0459, 0x0000],
    [0x226A, 0x0000],
    [0x21C7, 0x0000],
    [0x231E, 0x0000],
    [0x296B, 0x0000],
    [0x25FA, 0x0000],
    [0x0140, 0x0000],
    [0x23B0, 0x0000],
    [0x23B0, 0x0000],
    [0x2268, 0x0000],
    [0x2A89, 0x0000],
    [0x2A89, 0x0000],
    [0x2A87, 0x0000],
    [0x2A87, 0x0000],
    [0x2268, 0x0000],
    [0x22E6, 0x0000],
    [0x27EC, 0x0000],
    [0x21FD, 0x0000],
    [0x27E6, 0x0000],
    [0x27F5, 0x0000],
    [0x27F7, 0x0000],
    [0x27FC, 0x0000],
    [0x27F6, 0x0000],
    [0x21AB, 0x0000],
    [0x21AC, 0x0000],
    [0x2985, 0x0000],
    [0xD835, 0xDD5D],
    [0x2A2D, 0x0000],
    [0x2A34, 0x0000],
    [0x2217, 0x0000],
    [0x005F, 0x0000],
    [0x25CA, 0x0000],
    [0x25CA, 0x0000],
    [0x29EB, 0x0000],
    [0x0028, 0x0000],
    [0x2993, 0x0000],
    [0x21C6, 0x0000],
    [0x231F, 0x0000],
    [0x21CB, 0x0000],
    [0x296D, 0x0000],
    [0x200E, 0x0000],
    [0x22BF, 0x0000],
    [0x2039, 0x0000],
    [0xD835, 0xDCC1],
    [0x21B0, 0x0000],
    [0x2272, 0x0000],
    [0x2A8D, 0x0000],
    [0x2A8F, 0x0000],
    [0x005B, 0x0000],
    [0x2018, 0x0000],
    [0x201A, 0x0000],
    [0x0142, 0x0000],
    [0x003C, 0x0000],
    [0x003C, 0x0000],
    [0x2AA6, 0x0000],
    [0x2A79, 0x0000],
    [0x22D6, 0x0000],
    [0x22CB, 0x0000],
    [0x22C9, 0x0000],
    [0x2976, 0x0000],
    [0x2A7B, 0x0000],
    [0x2996, 0x0000],
    [0x25C3, 0x0000],
    [0x22B4, 0x0000],
    [0x25C2, 0x0000],
    [0x294A, 0x0000],
    [0x2966, 0x0000],
    [0x2268, 0xFE00],
    [0x2268, 0xFE00],
    [0x223A, 0x0000],
    [0x00AF, 0x0000],
    [0x00AF, 0x0000],
    [0x2642, 0x0000],
    [0x2720, 0x0000],
    [0x2720, 0x0000],
    [0x21A6, 0x0000],
    [0x21A6, 0x0000],
    [0x21A7, 0x0000],
    [0x21A4, 0x0000],
    [0x21A5, 0x0000],
    [0x25AE, 0x0000],
    [0x2A29, 0x0000],
    [0x043C, 0x0000],
    [0x2014, 0x0000],
    [0x2221, 0x0000],
    [0xD835, 0xDD2A],
    [0x2127, 0x0000],
    [0x00B5, 0x0000],
    [0x00B5, 0x0000],
    [0x2223, 0x0000],
    [0x002A, 0x0000],
    [0x2AF0, 0x0000],
    [0x00B7, 0x0000],
    [0x00B7, 0x0000],
    [0x2212, 0x0000],
    [0x229F, 0x0000],
    [0x2238, 0x0000],
    [0x2A2A, 0x0000],
    [0x2ADB, 0x0000],
    [0x2026, 0x0000],
    [0x2213, 0x0000],
    [0x22A7, 0x0000],
    [0xD835, 0xDD5E],
    [0x2213, 0x0000],
    [0xD835, 0xDCC2],
    [0x223E, 0x0000],
    [0x03BC, 0x0000],
    [0x22B8, 0x0000],
    [0x22B8, 0x0000],
    [0x22D9, 0x0338],
    [0x226B, 0x20D2],
    [0x226B, 0x0338],
    [0x21CD, 0x0000],
    [0x21CE, 0x0000],
    [0x22D8, 0x0338],
    [0x226A, 0x20D2],
    [0x226A, 0x0338],
    [0x21CF, 0x0000],
    [0x22AF, 0x0000],
    [0x22AE, 0x0000],
    [0x2207, 0x0000],
    [0x0144, 0x0000],
    [0x2220, 0x20D2],
    [0x2249, 0x0000],
    [0x2A70, 0x0338],
    [0x224B, 0x0338],
    [0x0149, 0x0000],
    [0x2249, 0x0000],
    [0x266E, 0x0000],
    [0x266E, 0x0000],
    [0x2115, 0x0000],
    [0x00A0, 0x0000],
    [0x00A0, 0x0000],
    [0x224E, 0x0338],
    [0x224F, 0x0338],
    [0x2A43, 0x0000],
    [0x0148, 0x0000],
    [0x0146, 0x0000],
    [0x2247, 0x0000],
    [0x2A6D, 0x0338],
    [0x2A42, 0x0000],
    [0x043D, 0x0000],
    [0x2013, 0x0000],
    [0x2260, 0x0000],
    [0x21D7, 0x0000],
    [0x2924, 0x0000],
    [0x2197, 0x0000],
    [0x2197, 0x0000],
    [0x2250, 0x0338],
    [0x2262, 0x0000],
    [0x2928, 0x0000],
    [0x2242, 0x0338],
    [0x2204, 0x0000],
    [0x2204, 0x0000],
    [0xD835, 0xDD2B],
    [0x2267, 0x0338],
    [0x2271, 0x0000],
    [0x2271, 0x0000],
    [0x2267, 0x0338],
    [0x2A7E, 0x0338],
    [0x2A7E, 0x0338],
    [0x2275, 0x0000],
    [0x226F, 0x0000],
    [0x226F, 0x0000],
    [0x21CE, 0x0000],
    [0x21AE, 0x0000],
    [0x2AF2, 0x0000],
    [0x220B, 0x0000],
    [0x22FC, 0x0000],
    [0x22FA, 0x0000],
    [0x220B, 0x0000],
    [0x045A, 0x0000],
    [0x21CD, 0x0000],
    [0x2266, 0x0338],
    [0x219A, 0x0000],
    [0x2025, 0x0000],
    [0x2270, 0x0000],
    [0x219A, 0x0000],
    [0x21AE, 0x0000],
    [0x2270, 0x0000],
    [0x2266, 0x0338],
    [0x2A7D, 0x0338],
    [0x2A7D, 0x0338],
    [0x226E, 0x0000],
    [0x2274, 0x0000],
    [0x226E, 0x0000],
    [0x22EA, 0x0000],
    [0x22EC, 0x0000],
    [0x2224, 0x0000],
    [0xD835, 0xDD5F],
    [0x00AC, 0x0000],
    [0x00AC, 0x0000],
    [0x2209, 0x0000],
    [0x22F9, 0x0338],
    [0x22F5, 0x0338],
    [0x2209, 0x0000],
    [0x22F7, 0x0000],
    [0x22F6, 0x0000],
    [0x220C, 0x0000],
    [0x220C, 0x0000],
    [0x22FE, 0x0000],
    [0x22FD, 0x0000],
    [0x2226, 0x0000],
    [0x2226, 0x0000],
    [0x2AFD, 0x20E5],
    [0x2202, 0x0338],
    [0x2A14, 0x0000],
    [0x2280, 0x0000],
    [0x22E0, 0x0000],
    [0x2AAF, 0x0338],
    [0x2280, 0x0000],
    [0x2AAF, 0x0338],
    [0x21CF, 0x0000],
    [0x219B, 0x0000],
    [0x2933, 0x0338],
    [0x219D, 0x0338],
    [0x219B, 0x0000],
    [0x22EB, 0x0000],
    [0x22ED, 0x0000],
    [0x2281, 0x0000],
    [0x22E1, 0x0000],
    [0x2AB0, 0x0338],
    [0xD835, 0xDCC3],
    [0x2224, 0x0000],
    [0x2226, 0x0000],
    [0x2241, 0x0000],
    [0x2244, 0x0000],
    [0x2244, 0x0000],
    [0x2224, 0x0000],
    [0x2226, 0x0000],
    [0x22E2, 0x0000],
    [0x22E3, 0x0000],
    [0x2284, 0x0000],
    [0x2AC5, 0x0338],
    [0x2288, 0x0000],
    [0x2282, 0x20D2],
    [0x2288, 0x0000],
    [0x2AC5, 0x0338],
    [0x2281, 0x0000],
    [0x2AB0, 0x0338],
    [0x2285, 0x0000],
    [0x2AC6, 0x0338],
    [0x2289, 0x0000],
    [0x2283, 0x20D2],
    [0x2289, 0x0000],
    [0x2AC6, 0x0338],
    [0x2279, 0x0000],
    [0x00F1, 0x0000],
    [0x00F1, 0x0000],
    [0x2278, 0x0000],
    [0x22EA, 0x0000],
    [0x22EC, 0x0000],
    [0x22EB, 0x0000],
    [0x22ED, 0x0000],
    [0x03BD, 0x0000],
    [0x0023, 0x0000],
    [0x2116, 0x0000],
    [0x2007, 0x0000],
    [0x22AD, 0x0000],
    [0x2904, 0x0000],
    [0x224D, 0x20D2],
    [0x22AC, 0x0000],
    [0x2265, 0x20D2],
    [0x003E, 0x20D2],
    [0x29DE, 0x0000],
    [0x2902, 0x0000],
    [0x2264, 0x20D2],
    [0x003C, 0x20D2],
    [0x22B4, 0x20D2],
    [0x2903, 0x0000],
    [0x22B5, 0x20D2],
    [0x223C, 0x20D2],
    [0x21D6, 0x0000],
    [0x2923, 0x0000],
    [0x2196, 0x0000],
    [0x2196, 0x0000],
    [0x2927, 0x0000],
    [0x24C8, 0x0000],
    [0x00F3, 0x0000],
    [0x00F3, 0x0000],
    [0x229B, 0x0000],
    [0x229A, 0x0000],
    [0x00F4, 0x0000],
    [0x00F4, 0x0000],
    [0x043E, 0x0000],
    [0x229D, 0x0000],
    [0x0151, 0x0000],
    [0x2A38, 0x0000],
    [0x2299, 0x0000],
    [0x29BC, 0x0000],
    [0x0153, 0x0000],
    [0x29BF, 0x0000],
    [0xD835, 0xDD2C],
    [0x02DB, 0x0000],
    [0x00F2, 0x0000],
    [0x00F2, 0x0000],
    [0x29C1, 0x0000],
    [0x29B5, 0x0000],
    [0x03A9, 0x0000],
    [0x222E, 0x0000],
    [0x21BA, 0x0000],
    [0x29BE, 0x0000],
    [0x29BB, 0x0000],
    [0x203E, 0x0000],
    [0x29C0, 0x0000],
    [0x014D, 0x0000],
    [0x03C9, 0x0000],
    [0x03BF, 0x0000],
    [0x29B6, 0x0000],
    [0x2296, 0x0000],
    [0xD835, 0xDD60],
    [0x29B7, 0x0000],
    [0x29B9, 0x0000],
    [0x2295, 0x0000],
    [0x2228, 0x0000],
    [0x21BB, 0x0000],
    [0x2A5D, 0x0000],
    [0x2134, 0x0000],
    [0x2134, 0x0000],
    [0x00AA, 0x0000],
    [0x00AA, 0x0000],
    [0x00BA, 0x0000],
    [0x00BA, 0x0000],
    [0x22B6, 0x0000],
    [0x2A56, 0x0000],
    [0x2A57, 0x0000],
    [0x2A5B, 0x0000],
    [0x2134, 0x0000],
    [0x00F8, 0x0000],
    [0x00F8, 0x0000],
    [0x2298, 0x0000],
    [0x00F5, 0x0000],
    [0x00F5, 0x0000],
    [0x2297, 0x0000],
    [0x2A36, 0x0000],
    [0x00F6, 0x0000],
    [0x00F6, 0x0000],
    [0x233D, 0x0000],
    [0x2225, 0x0000],
    [0x00B6, 0x0000],
    [0x00B6, 0x0000],
    [0x2225, 0x0000],
    [0x2AF3, 0x0000],
    [0x2AFD, 0x0000],
    [0x2202, 0x0000],
    [0x043F, 0x0000],
    [0x0025, 0x0000],
    [0x002E, 0x0000],
    [0x2030, 0x0000],
    [0x22A5, 0x0000],
    [0x2031, 0x0000],
    [0xD835, 0xDD2D],
    [0x03C6, 0x0000],
    [0x03D5, 0x0000],
    [0x2133, 0x0000],
    [0x260E, 0x0000],
    [0x03C0, 0x0000],
    [0x22D4, 0x0000],
    [0x03D6, 0x0000],
    [0x210F, 0x0000],
    [0x210E, 0x0000],
    [0x210F, 0x0000],
    [0x002B, 0x0000],
    [0x2A23, 0x0000],
    [0x229E, 0x0000],
    [0x2A22, 0x0000],
    [0x2214, 0x0000],
    [0x2A25, 0x0000],
    [0x2A72, 0x0000],
    [0x00B1, 0x0000],
    [0x00B1, 0x0000],
    [0x2A26, 0x0000],
    [0x2A27, 0x0000],
    [0x00B1, 0x0000],
    [0x2A15, 0x0000],
    [0xD835, 0xDD61],
    [0x00A3, 0x0000],
    [0x00A3, 0x0000],
    [0x227A, 0x0000],
    [0x2AB3, 0x0000],
    [0x2AB7, 0x0000],
    [0x227C, 0x0000],
    [0x2AAF, 0x0000],
    [0x227A, 0x0000],
    [0x2AB7, 0x0000],
    [0x227C, 0x0000],
    [0x2AAF, 0x0000],
    [0x2AB9, 0x0000],
    [0x2AB5, 0x0000],
    [0x22E8, 0x0000],
    [0x227E, 0x0000],
    [0x2032, 0x0000],
    [0x2119, 0x0000],
    [0x2AB5, 0x0000],
    [0x2AB9, 0x0000],
    [0x22E8, 0x0000],
    [0x220F, 0x0000],
    [0x232E, 0x0000],
    [0x2312, 0x0000],
    [0x2313, 0x0000],
    [0x221D, 0x0000],
    [0x221D, 0x0000],
    [0x227E, 0x0000],
    [0x22B0, 0x0000],
    [0xD835, 0xDCC5],
    [0x03C8, 0x0000],
    [0x2008, 0x0000],
    [0xD835, 0xDD2E],
    [0x2A0C, 0x0000],
    [0xD835, 0xDD62],
    [0x2057, 0x0000],
    [0xD835, 0xDCC6],
    [0x210D, 0x0000],
    [0x2A16, 0x0000],
    [0x003F, 0x0000],
    [0x225F, 0x0000],
    [0x0022, 0x0000],
    [0x0022, 0x0000],
    [0x21DB, 0x0000],
    [0x21D2, 0x0000],
    [0x291C, 0x0000],
    [0x290F, 0x0000],
    [0x2964, 0x0000],
    [0x223D, 0x0331],
    [0x0155, 0x0000],
    [0x221A, 0x0000],
    [0x29B3, 0x0000],
    [0x27E9, 0x0000],
    [0x2992, 0x0000],
    [0x29A5, 0x0000],
    [0x27E9, 0x0000],
    [0x00BB, 0x0000],
    [0x00BB, 0x0000],
    [0x2192, 0x0000],
    [0x2975, 0x0000],
    [0x21E5, 0x0000],
    [0x2920, 0x0000],
    [0x2933, 0x0000],
    [0x291E, 0x0000],
    [0x21AA, 0x0000],
    [0x21AC, 0x0000],
    [0x2945, 0x0000],
    [0x2974, 0x0000],
    [0x21A3, 0x0000],
    [0x219D, 0x0000],
    [0x291A, 0x0000],
    [0x2236, 0x0000],
    [0x211A, 0x0000],
    [0x290D, 0x0000],
    [0x2773, 0x0000],
    [0x007D, 0x0000],
    [0x005D, 0x0000],
    [0x298C, 0x0000],
    [0x298E, 0x0000],
    [0x2990, 0x0000],
    [0x0159, 0x0000],
    [0x0157, 0x0000],
    [0x2309, 0x0000],
    [0x007D, 0x0000],
    [0x0440, 0x0000],
    [0x2937, 0x0000],
    [0x2969, 0x0000],
    [0x201D, 0x0000],
    [0x201D, 0x0000],
    [0x21B3, 0x0000],
    [0x211C, 0x0000],
    [0x211B, 0x0000],
    [0x211C, 0x0000],
    [0x211D, 0x0000],
    [0x25AD, 0x0000],
    [0x00AE, 0x0000],
    [0x00AE, 0x0000],
    [0x297D, 0x0000],
    [0x230B, 0x0000],
    [0xD835, 0xDD2F],
    [0x21C1, 0x0000],
    [0x21C0, 0x0000],
    [0x296C, 0x0000],
    [0x03C1, 0x0000],
    [0x03F1, 0x0000],
    [0x2192, 0x0000],
    [0x21A3, 0x0000],
    [0x21C1, 0x0000],
    [0x21C0, 0x0000],
    [0x21C4, 0x0000],
    [0x21CC, 0x0000],
    [0x21C9, 0x0000],
    [0x219D, 0x0000],
    [0x22CC, 0x0000],
    [0x02DA, 0x0000],
    [0x2253, 0x0000],
    [0x21C4, 0x0000],
    [0x21CC, 0x0000],
    [0x200F, 0x0000],
    [0x23B1, 0x0000],
    [0x23B1, 0x0000],
    [0x2AEE, 0x0000],
    [0x27ED, 0x0000],
    [0x21FE, 0x0000],
    [0x27E7, 0x0000],
    [0x2986, 0x0000],
    [0xD835, 0xDD63],
    [0x2A2E, 0x0000],
    [0x2A35, 0x0000],
    [0x0029, 0x0000],
    [0x2994, 0x0000],
    [0x2A12, 0x0000],
    [0x21C9, 0x0000],
    [0x203A, 0x0000],
    [0xD835, 0xDCC7],
    [0x21B1, 0x0000],
    [0x005D, 0x0000],
    [0x2019, 0x0000],
    [0x2019, 0x0000],
    [0x22CC, 0x0000],
    [0x22CA, 0x0000],
    [0x25B9, 0x0000],
    [0x22B5, 0x0000],
    [0x25B8, 0x0000],
    [0x29CE, 0x0000],
    [0x2968, 0x0000],
    [0x211E, 0x0000],
    [0x015B, 0x0000],
    [0x201A, 0x0000],
    [0x227B, 0x0000],
    [0x2AB4, 0x0000],
    [0x2AB8, 0x0000],
    [0x0161, 0x0000],
    [0x227D, 0x0000],
    [0x2AB0, 0x0000],
    [0x015F, 0x0000],
    [0x015D, 0x0000],
    [0x2AB6, 0x0000],
    [0x2ABA, 0x0000],
    [0x22E9, 0x0000],
    [0x2A13, 0x0000],
    [0x227F, 0x0000],
    [0x0441, 0x0000],
    [0x22C5, 0x0000],
    [0x22A1, 0x0000],
    [0x2A66, 0x0000],
    [0x21D8, 0x0000],
    [0x2925, 0x0000],
    [0x2198, 0x0000],
    [0x2198, 0x0000],
    [0x00A7, 0x0000],
    [0x00A7, 0x0000],
    [0x003B, 0x0000],
    [0x2929, 0x0000],
    [0x2216, 0x0000],
    [0x2216, 0x0000],
    [0x2736, 0x0000],
    [0xD835, 0xDD30],
    [0x2322, 0x0000],
    [0x266F, 0x0000],
    [0x0449, 0x0000],
    [0x0448, 0x0000],
    [0x2223, 0x0000],
    [0x2225, 0x0000],
    [0x00AD, 0x0000],
    [0x00AD, 0x0000],
    [0x03C3, 0x0000],
    [0x03C2, 0x0000],
    [0x03C2, 0x0000],
    [0x223C, 0x0000],
    [0x2A6A, 0x0000],
    [0x2243, 0x0000],
    [0x2243, 0x0000],
    [0x2A9E, 0x0000],
    [0x2AA0, 0x0000],
    [0x2A9D, 0x0000],
    [0x2A9F, 0x0000],
    [0x2246, 0x0000],
    [0x2A24, 0x0000],
    [0x2972, 0x0000],
    [0x2190, 0x0000],
    [0x2216, 0x0000],
    [0x2A33, 0x0000],
    [0x29E4, 0x0000],
    [0x2223, 0x0000],
    [0x2323, 0x0000],
    [0x2AAA, 0x0000],
    [0x2AAC, 0x0000],
    [0x2AAC, 0xFE00],
    [0x044C, 0x0000],
    [0x002F, 0x0000],
    [0x29C4, 0x0000],
    [0x233F, 0x0000],
    [0xD835, 0xDD64],
    [0x2660, 0x0000],
    [0x2660, 0x0000],
    [0x2225, 0x0000],
    [0x2293, 0x0000],
    [0x2293, 0xFE00],
    [0x2294, 0x0000],
    [0x2294, 0xFE00],
    [0x228F, 0x0000],
    [0x2291, 0x0000],
    [0x228F, 0x0000],
    [0x2291, 0x0000],
    [0x2290, 0x0000],
    [0x2292, 0x0000],
    [0x2290, 0x0000],
    [0x2292, 0x0000],
    [0x25A1, 0x0000],
    [0x25A1, 0x0000],
    [0x25AA, 0x0000],
    [0x25AA, 0x0000],
    [0x2192, 0x0000],
    [0xD835, 0xDCC8],
    [0x2216, 0x0000],
    [0x2323, 0x0000],
    [0x22C6, 0x0000],
    [0x2606, 0x0000],
    [0x2605, 0x0000],
    [0x03F5, 0x0000],
    [0x03D5, 0x0000],
    [0x00AF, 0x0000],
    [0x2282, 0x0000],
    [0x2AC5, 0x0000],
    [0x2ABD, 0x0000],
    [0x2286, 0x0000],
    [0x2AC3, 0x0000],
    [0x2AC1, 0x0000],
    [0x2ACB, 0x0000],
    [0x228A, 0x0000],
    [0x2ABF, 0x0000],
    [0x2979, 0x0000],
    [0x2282, 0x0000],
    [0x2286, 0x0000],
    [0x2AC5, 0x0000],
    [0x228A, 0x0000],
    [0x2ACB, 0x0000],
    [0x2AC7, 0x0000],
    [0x2AD5, 0x0000],
    [0x2AD3, 0x0000],
    [0x227B, 0x0000],
    [0x2AB8, 0x0000],
    [0x227D, 0x0000],
    [0x2AB0, 0x0000],
    [0x2ABA, 0x0000],
    [0x2AB6, 0x0000],
    [0x22E9, 0x0000],
    [0x227F, 0x0000],
    [0x2211, 0x0000],
    [0x266A, 0x0000],
    [0x00B9, 0x0000],
    [0x00B9, 0x0000],
    [0x00B2, 0x0000],
    [0x00B2, 0x0000],
    [0x00B3, 0x0000],
    [0x00B3, 0x0000],
    [0x2283, 0x0000],
    [0x2AC6, 0x0000],
    [0x2ABE, 0x0000],
    [0x2AD8, 0x0000],
    [0x2287, 0x0000],
    [0x2AC4, 0x0000],
    [0x27C9, 0x0000],
    [0x2AD7, 0x0000],
    [0x297B, 0x0000],
    [0x2AC2, 0x0000],
    [0x2ACC, 0x0000],
    [0x228B, 0x0000],
    [0x2AC0, 0x0000],
    [0x2283, 0x0000],
    [0x2287, 0x0000],
    [0x2AC6, 0x0000],
    [0x228B, 0x0000],
    [0x2ACC, 0x0000],
    [0x2AC8, 0x0000],
    [0x2AD4, 0x0000],
    [0x2AD6, 0x0000],
    [0x21D9, 0x0000],
    [0x2926, 0x0000],
    [0x2199, 0x0000],
    [0x2199, 0x0000],
    [0x292A, 0x0000],
    [0x00DF, 0x0000],
    [0x00DF, 0x0000],
    [0x2316, 0x0000],
    [0x03C4, 0x0000],
    [0x23B4, 0x0000],
    [0x0165, 0x0000],
    [0x0163, 0x0000],
    [0x0442, 0x0000],
    [0x20DB, 0x0000],
    [0x2315, 0x0000],
    [0xD835, 0xDD31],
    [0x2234, 0x0000],
    [0x2234, 0x0000],
    [0x03B8, 0x0000],
    [0x03D1, 0x0000],
    [0x03D1, 0x0000],
    [0x2248, 0x0000],
    [0x223C, 0x0000],
    [0x2009, 0x0000],
    [0x2248, 0x0000],
    [0x223C, 0x0000],
    [0x00FE, 0x0000],
    [0x00FE, 0x0000],
    [0x02DC, 0x0000],
    [0x00D7, 0x0000],
    [0x00D7, 0x0000],
    [0x22A0, 0x0000],
    [0x2A31, 0x0000],
    [0x2A30, 0x0000],
    [0x222D, 0x0000],
    [0x2928, 0x0000],
    [0x22A4, 0x0000],
    [0x2336, 0x0000],
    [0x2AF1, 0x0000],
    [0xD835, 0xDD65],
    [0x2ADA, 0x0000],
    [0x2929, 0x0000],
    [0x2034, 0x0000],
    [0x2122, 0x0000],
    [0x25B5, 0x0000],
    [0x25BF, 0x0000],
    [0x25C3, 0x0000],
    [0x22B4, 0x0000],
    [0x225C, 0x0000],
    [0x25B9, 0x0000],
    [0x22B5, 0x0000],
    [0x25EC, 0x0000],
    [0x225C, 0x0000],
    [0x2A3A, 0x0000],
    [0x2A39, 0x0000],
    [0x29CD, 0x0000],
    [0x2A3B, 0x0000],
    [0x23E2, 0x0000],
    [0xD835, 0xDCC9],
    [0x0446, 0x0000],
    [0x045B, 0x0000],
    [0x0167, 0x0000],
    [0x226C, 0x0000],
    [0x219E, 0x0000],
    [0x21A0, 0x0000],
    [0x21D1, 0x0000],
    [0x2963, 0x0000],
    [0x00FA, 0x0000],
    [0x00FA, 0x0000],
    [0x2191, 0x0000],
    [0x045E, 0x0000],
    [0x016D, 0x0000],
    [0x00FB, 0x0000],
    [0x00FB, 0x0000],
    [0x0443, 0x0000],
    [0x21C5, 0x0000],
    [0x0171, 0x0000],
    [0x296E, 0x0000],
    [0x297E, 0x0000],
    [0xD835, 0xDD32],
    [0x00F9, 0x0000],
    [0x00F9, 0x0000],
    [0x21BF, 0x0000],
    [0x21BE, 0x0000],
    [0x2580, 0x0000],
    [0x231C, 0x0000],
    [0x231C, 0x0000],
    [0x230F, 0x0000],
    [0x25F8, 0x0000],
    [0x016B, 0x0000],
    [0x00A8, 0x0000],
    [0x00A8, 0x0000],
    [0x0173, 0x0000],
    [0xD835, 0xDD66],
    [0x2191, 0x0000],
    [0x2195, 0x0000],
    [0x21BF, 0x0000],
    [0x21BE, 0x0000],
    [0x228E, 0x0000],
    [0x03C5, 0x0000],
    [0x03D2, 0x0000],
    [0x03C5, 0x0000],
    [0x21C8, 0x0000],
    [0x231D, 0x0000],
    [0x231D, 0x0000],
    [0x230E, 0x0000],
    [0x016F, 0x0000],
    [0x25F9, 0x0000],
    [0xD835, 0xDCCA],
    [0x22F0, 0x0000],
    [0x0169, 0x0000],
    [0x25B5, 0x0000],
    [0x25B4, 0x0000],
    [0x21C8, 0x0000],
    [0x00FC, 0x0000],
    [0x00FC, 0x0000],
    [0x29A7, 0x0000],
    [0x21D5, 0x0000],
    [0x2AE8, 0x0000],
    [0x2AE9, 0x0000],
    [0x22A8, 0x0000],
    [0x299C, 0x0000],
    [0x03F5, 0x0000],
    [0x03F0, 0x0000],
    [0x2205, 0x0000],
    [0x03D5, 0x0000],
    [0x03D6, 0x0000],
    [0x221D, 0x0000],
    [0x2195, 0x0000],
    [0x03F1, 0x0000],
    [0x03C2, 0x0000],
    [0x228A, 0xFE00],
    [0x2ACB, 0xFE00],
    [0x228B, 0xFE00],
    [0x2ACC, 0xFE00],
    [0x03D1, 0x0000],
    [0x22B2, 0x0000],
    [0x22B3, 0x0000],
    [0x0432, 0x0000],
    [0x22A2, 0x0000],
    [0x2228, 0x0000],
    [0x22BB, 0x0000],
    [0x225A, 0x0000],
    [0x22EE, 0x0000],
    [0x007C, 0x0000],
    [0x007C, 0x0000],
    [0xD835, 0xDD33],
    [0x22B2, 0x0000],
    [0x2282, 0x20D2],
    [0x2283, 0x20D2],
    [0xD835, 0xDD67],
    [0x221D, 0x0000],
    [0x22B3, 0x0000],
    [0xD835, 0xDCCB],
    [0x2ACB, 0xFE00],
    [0x228A, 0xFE00],
    [0x2ACC, 0xFE00],
    [0x228B, 0xFE00],
    [0x299A, 0x0000],
    [0x0175, 0x0000],
    [0x2A5F, 0x0000],
    [0x2227, 0x0000],
    [0x2259, 0x0000],
    [0x2118, 0x0000],
    [0xD835, 0xDD34],
    [0xD835, 0xDD68],
    [0x2118, 0x0000],
    [0x2240, 0x0000],
    [0x2240, 0x0000],
    [0xD835, 0xDCCC],
    [0x22C2, 0x0000],
    [0x25EF, 0x0000],
    [0x22C3, 0x0000],
    [0x25BD, 0x0000],
    [0xD835, 0xDD35],
    [0x27FA, 0x0000],
    [0x27F7, 0x0000],
    [0x03BE, 0x0000],
    [0x27F8, 0x0000],
    [0x27F5, 0x0000],
    [0x27FC, 0x0000],
    [0x22FB, 0x0000],
    [0x2A00, 0x0000],
    [0xD835, 0xDD69],
    [0x2A01, 0x0000],
    [0x2A02, 0x0000],
    [0x27F9, 0x0000],
    [0x27F6, 0x0000],
    [0xD835, 0xDCCD],
    [0x2A06, 0x0000],
    [0x2A04, 0x0000],
    [0x25B3, 0x0000],
    [0x22C1, 0x0000],
    [0x22C0, 0x0000],
    [0x00FD, 0x0000],
    [0x00FD, 0x0000],
    [0x044F, 0x0000],
    [0x0177, 0x0000],
    [0x044B, 0x0000],
    [0x00A5, 0x0000],
    [0x00A5, 0x0000],
    [0xD835, 0xDD36],
    [0x0457, 0x0000],
    [0xD835, 0xDD6A],
    [0xD835, 0xDCCE],
    [0x044E, 0x0000],
    [0x00FF, 0x0000],
    [0x00FF, 0x0000],
    [0x017A, 0x0000],
    [0x017E, 0x0000],
    [0x0437, 0x0000],
    [0x017C, 0x0000],
    [0x2128, 0x0000],
    [0x03B6, 0x0000],
    [0xD835, 0xDD37],
    [0x0436, 0x0000],
    [0x21DD, 0x0000],
    [0xD835, 0xDD6B],
    [0xD835, 0xDCCF],
    [0x200D, 0x0000],
    [0x200C, 0x0000],
];
