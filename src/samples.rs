//! Built-in sample inputs.
//!
//! Each sample feeds one of the toolkit's operations: a mixed
//! digit/letter string for the classifier, a ROT13 cryptogram for the key
//! search, and a snippet encrypted under the derived key.

/// Mixed digit/letter string for [`classify`](crate::classify).
pub const CLASSIFIER_SAMPLE: &str = "56aAww1984sktr235270aYmn145ss785fsq31D0";

/// Upper-case cryptogram; readable under key 13.
pub const CRYPTOGRAM: &str = "\
VZ FRYSVFU VZCNGVRAG NAQ N YVGGYR VAFRPHER V ZNXR ZVFGNXRF V NZ BHG BS PBAGEBY
NAQNG GVZRF UNEQ GB UNAQYR OHG VS LBH PNAG UNAQYR ZR NG ZL JBEFG GURA LBH FHER NF
URYYQBAQ QRFPNEIR ZR NG ZL ORFG ZNEVYLA ZBAEBR
";

/// Short program listing encrypted under the derived key.
pub const ENCRYPTED_SNIPPET: &str = "\
tybony_inevnoyr = 100
zl_qvpg = {'xrl1': 'inyhr1', 'xrl2': 'inyhr2', 'xrl3': 'inyhr3'}

qrs cebprff_ahzoref():
    tybony tybony_inevnoyr
    ybpny_inevnoyr = 5
    ahzoref = [1, 2, 3, 4, 5]

    juvyr ybpny_inevnoyr > 0:
        vs ybpny_inevnoyr % 2 == 0:
            ahzoref.erzbir(ybpny_inevnoyr)
        ybpny_inevnoyr -= 1

    erghea ahzoref

zl_frg = {1, 2, 3, 4, 5, 5, 4, 3, 2, 1}
erfhyg = cebprff_ahzoref(ahzoref=zl_frg)

qrs zbqvsl_qvpg():
    ybpny_inevnoyr = 10
    zl_qvpg['xrl4'] = ybpny_inevnoyr

zbqvsl_qvpg(5)

qrs hcqngr_tybony():
    tybony tybony_inevnoyr
    tybony_inevnoyr += 10

    sbe v va enatr(5):
        cevag(v)
        v += 1

    vs zl_frg vf abg Abar naq zl_qvpg['xrl4'] == 10:
        cevag(\"Pbaqvgvba zrg!\")

    vs 5 abg va zl_qvpg:
        cevag(\"5 abg sbhaq va gur qvpgvbanel!\")

    cevag(tybony_inevnoyr)

    cevag(zl_qvpg)
    cevag(zl_frg)
";
