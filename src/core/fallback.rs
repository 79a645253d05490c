//! Compiled-in subset of the Public Suffix List.
//!
//! Country-code and generic top-level domains plus the second-level
//! registries and hosting suffixes that show up most often. A table over
//! the embedded list answers `exists` for these keys without loading the
//! full list. Host lookups check exception rules first and load it anyway.
//! Keys are lowercase and ASCII.

/// Common public suffixes, always available without loading the full list.
pub const FALLBACK_SUFFIXES: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs",
    "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "cl", "cm", "cn",
    "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec",
    "ee", "eg", "es", "et", "eu", "fi", "fj", "fm", "fo", "fr", "ga", "gb", "gd", "ge", "gf",
    "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy", "hk",
    "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq", "ir", "is", "it",
    "je", "jo", "jp", "ke", "kg", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz", "la", "lb",
    "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma", "mc", "md", "me", "mg", "mh",
    "mk", "ml", "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw", "mx", "my", "mz",
    "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "nr", "nu", "nz", "om", "pa", "pe", "pf",
    "ph", "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru",
    "rw", "sa", "sb", "sc", "sd", "se", "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so",
    "sr", "ss", "st", "su", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk",
    "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz",
    "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "zm", "zw", "com", "net",
    "org", "edu", "gov", "mil", "int", "info", "biz", "name", "pro", "mobi", "asia", "tel",
    "travel", "jobs", "aero", "coop", "museum", "cat", "xxx", "post", "app", "dev", "page",
    "blog", "shop", "store", "online", "site", "tech", "xyz", "top", "club", "live", "cloud",
    "news", "digital", "agency", "design", "email", "media", "network", "world", "life", "art",
    "space", "website", "link", "today", "solutions", "services", "academy", "company",
    "group", "global", "studio", "fun", "icu", "vip", "work", "wiki", "google", "amazon",
    "apple", "microsoft", "bank", "insurance", "law", "health", "moe", "ninja", "rocks",
    "bet.ar", "com.ar", "coop.ar", "edu.ar", "gob.ar", "gov.ar", "int.ar", "mil.ar",
    "musica.ar", "mutual.ar", "net.ar", "org.ar", "senasa.ar", "tur.ar", "com.au", "net.au",
    "org.au", "edu.au", "gov.au", "asn.au", "id.au", "info.au", "conf.au", "oz.au", "act.au",
    "nsw.au", "nt.au", "qld.au", "sa.au", "tas.au", "vic.au", "wa.au", "com.hk", "edu.hk",
    "gov.hk", "idv.hk", "net.hk", "org.hk", "ac.il", "co.il", "gov.il", "idf.il", "k12.il",
    "muni.il", "net.il", "org.il", "com.mx", "org.mx", "gob.mx", "edu.mx", "net.mx", "biz.my",
    "com.my", "edu.my", "gov.my", "mil.my", "name.my", "net.my", "org.my", "ac.nz", "co.nz",
    "cri.nz", "geek.nz", "gen.nz", "govt.nz", "health.nz", "iwi.nz", "kiwi.nz", "maori.nz",
    "mil.nz", "net.nz", "org.nz", "parliament.nz", "school.nz", "com.ph", "net.ph", "org.ph",
    "gov.ph", "edu.ph", "ngo.ph", "mil.ph", "i.ph", "com.sg", "net.sg", "org.sg", "gov.sg",
    "edu.sg", "per.sg", "ac.th", "co.th", "go.th", "in.th", "mi.th", "net.th", "or.th",
    "av.tr", "bbs.tr", "bel.tr", "biz.tr", "com.tr", "dr.tr", "edu.tr", "gen.tr", "gov.tr",
    "info.tr", "mil.tr", "k12.tr", "kep.tr", "name.tr", "net.tr", "org.tr", "pol.tr", "tel.tr",
    "tsk.tr", "tv.tr", "web.tr", "nc.tr", "edu.tw", "gov.tw", "mil.tw", "com.tw", "net.tw",
    "org.tw", "idv.tw", "game.tw", "ebiz.tw", "club.tw", "ac.uk", "co.uk", "gov.uk", "ltd.uk",
    "me.uk", "net.uk", "nhs.uk", "org.uk", "plc.uk", "police.uk", "com.vn", "net.vn", "org.vn",
    "edu.vn", "gov.vn", "int.vn", "ac.vn", "biz.vn", "info.vn", "name.vn", "pro.vn",
    "health.vn", "ac.za", "agric.za", "alt.za", "co.za", "edu.za", "gov.za", "grondar.za",
    "law.za", "mil.za", "net.za", "ngo.za", "nic.za", "nis.za", "nom.za", "org.za",
    "school.za", "tm.za", "web.za", "online.th", "shop.th", "url.tw", "conn.uk", "copro.uk",
    "hosp.uk", "independent-commission.uk", "independent-inquest.uk", "independent-inquiry.uk",
    "independent-panel.uk", "independent-review.uk", "public-inquiry.uk",
    "royal-commission.uk", "pymnt.uk", "blogspot.hk", "blogspot.mx", "blogspot.my",
    "blogspot.sg", "blogspot.tw", "blogspot.vn", "secaas.hk", "enscaled.sg", "barsy.uk",
    "ltd.hk", "inc.hk", "ac.cn", "com.cn", "edu.cn", "gov.cn", "net.cn", "org.cn", "ac.in",
    "co.in", "com.in", "edu.in", "gov.in", "net.in", "org.in", "web.in", "ac.kr", "co.kr",
    "go.kr", "ne.kr", "or.kr", "ac.id", "co.id", "go.id", "net.id", "or.id", "web.id", "ac.jp",
    "ad.jp", "co.jp", "ed.jp", "go.jp", "gr.jp", "lg.jp", "ne.jp", "or.jp", "栃木.jp", "愛知.jp",
    "愛媛.jp", "兵庫.jp", "熊本.jp", "茨城.jp", "千葉.jp", "長崎.jp", "長野.jp", "新潟.jp", "青森.jp", "静岡.jp",
    "東京.jp", "石川.jp", "埼玉.jp", "三重.jp", "京都.jp", "佐賀.jp", "大分.jp", "大阪.jp", "奈良.jp", "宮城.jp",
    "宮崎.jp", "富山.jp", "山口.jp", "山形.jp", "山梨.jp", "岩手.jp", "岐阜.jp", "岡山.jp", "島根.jp", "広島.jp",
    "徳島.jp", "沖縄.jp", "滋賀.jp", "福井.jp", "福岡.jp", "福島.jp", "秋田.jp", "群馬.jp", "香川.jp", "高知.jp",
    "鳥取.jp", "com.br", "net.br", "org.br", "gov.br", "edu.br", "art.br", "blog.br", "eco.br",
    "eng.br", "ind.br", "inf.br", "med.br", "mil.br", "tv.br", "wiki.br", "com.fr", "com.pl",
    "net.pl", "org.pl", "gov.pl", "edu.pl", "co.pl", "gov.it", "edu.it", "co.it", "com.ua",
    "net.ua", "org.ua", "gov.ua", "edu.ua", "co.ua", "com.ru", "net.ru", "org.ru", "gov.ru",
    "edu.ru", "ac.ru", "com.es", "org.es", "edu.es", "com.eg", "net.eg", "org.eg", "gov.eg",
    "edu.eg", "com.co", "net.co", "org.co", "gov.co", "edu.co", "com.pk", "net.pk", "org.pk",
    "gov.pk", "edu.pk", "com.ng", "net.ng", "org.ng", "gov.ng", "edu.ng", "co.ke", "ac.ke",
    "github.io", "gitlab.io", "herokuapp.com", "blogspot.com", "appspot.com", "netlify.app",
    "vercel.app", "pages.dev", "workers.dev", "web.app", "firebaseapp.com",
    "azurewebsites.net", "cloudapp.net", "cloudfront.net", "elasticbeanstalk.com",
    "readthedocs.io", "now.sh", "fly.dev", "onrender.com", "glitch.me", "repl.co",
    "myshopify.com", "blogspot.co.uk", "s3.amazonaws.com", "codeberg.page", "ngrok.io",
];
