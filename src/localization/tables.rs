//! Built-in localization data
//!
//! Embedded translation tables for the supported Indian languages. Loaded
//! into a `LocalizationCatalog` once at startup; nothing reads these
//! statics directly at request time.

/// Supported language metadata
#[derive(Debug, Clone, Copy)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub rtl: bool,
}

/// (language code, text)
pub type Translations = &'static [(&'static str, &'static str)];

pub static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "en", name: "English", native_name: "English", rtl: false },
    LanguageEntry { code: "hi", name: "Hindi", native_name: "हिंदी", rtl: false },
    LanguageEntry { code: "pa", name: "Punjabi", native_name: "ਪੰਜਾਬੀ", rtl: false },
    LanguageEntry { code: "ks", name: "Kashmiri", native_name: "کٲشُر", rtl: true },
    LanguageEntry { code: "doi", name: "Dogri", native_name: "डोगरी", rtl: false },
    LanguageEntry { code: "gu", name: "Gujarati", native_name: "ગુજરાતી", rtl: false },
    LanguageEntry { code: "te", name: "Telugu", native_name: "తెలుగు", rtl: false },
    LanguageEntry { code: "ta", name: "Tamil", native_name: "தமிழ்", rtl: false },
    LanguageEntry { code: "kn", name: "Kannada", native_name: "ಕನ್ನಡ", rtl: false },
    LanguageEntry { code: "ml", name: "Malayalam", native_name: "മലയാളം", rtl: false },
];

// ============================================================================
// Terms (key → translations)
// ============================================================================

pub static TERMS: &[(&str, Translations)] = &[
    ("weather", &[
        ("en", "Weather"),
        ("hi", "मौसम"),
        ("pa", "ਮੌਸਮ"),
        ("ks", "موسم"),
        ("doi", "मौसम"),
        ("gu", "હવામાન"),
        ("te", "వాతావరణం"),
        ("ta", "வானிலை"),
        ("kn", "ಹವಾಮಾನ"),
        ("ml", "കാലാവസ്ഥ"),
    ]),
    ("cyclone", &[
        ("en", "Cyclone"),
        ("hi", "चक्रवात"),
        ("pa", "ਚੱਕਰਵਾਤ"),
        ("ks", "طوفان"),
        ("doi", "चक्रवात"),
        ("gu", "ચક્રવાત"),
        ("te", "తుఫాను"),
        ("ta", "சூறாவளி"),
        ("kn", "ಚಂಡಮಾರುತ"),
        ("ml", "ചുഴലിക്കാറ്റ്"),
    ]),
    ("flood", &[
        ("en", "Flood"),
        ("hi", "बाढ़"),
        ("pa", "ਹੜ੍ਹ"),
        ("ks", "ژھیل"),
        ("doi", "बाढ़"),
        ("gu", "પૂર"),
        ("te", "వరద"),
        ("ta", "வெள்ளம்"),
        ("kn", "ಪ್ರವಾಹ"),
        ("ml", "വെള്ളപ്പൊക്കം"),
    ]),
    ("drought", &[
        ("en", "Drought"),
        ("hi", "सूखा"),
        ("pa", "ਸੋਕਾ"),
        ("ks", "خشک سالی"),
        ("doi", "सुक्खा"),
        ("gu", "દુષ્કાળ"),
        ("te", "కరువు"),
        ("ta", "வறட்சி"),
        ("kn", "ಬರ"),
        ("ml", "വരൾച്ച"),
    ]),
    ("heatwave", &[
        ("en", "Heatwave"),
        ("hi", "गर्मी की लहर"),
        ("pa", "ਗਰਮੀ ਦੀ ਲਹਿਰ"),
        ("ks", "گرمی کی لہر"),
        ("doi", "गर्मी दी लहर"),
        ("gu", "ગરમીની લહેર"),
        ("te", "వేడిమిగల్పు"),
        ("ta", "வெப்ப அலை"),
        ("kn", "ಶಾಖದ ಅಲೆ"),
        ("ml", "ചൂട് തരംഗം"),
    ]),
    ("evacuate", &[
        ("en", "Evacuate immediately"),
        ("hi", "तुरंत निकलें"),
        ("pa", "ਤੁਰੰਤ ਨਿਕਲੋ"),
        ("ks", "فوری طور پر نکلیں"),
        ("doi", "तुरंत निकलो"),
        ("gu", "તાત્કાલિક સ્થળાંતર કરો"),
        ("te", "వెంటనే ఖాళీ చేయండి"),
        ("ta", "உடனே வெளியேறுங்கள்"),
        ("kn", "ತಕ್ಷಣ ಸ್ಥಳಾಂತರಿಸಿ"),
        ("ml", "ഉടനെ ഒഴിഞ്ഞുപോകുക"),
    ]),
    ("stayIndoors", &[
        ("en", "Stay indoors and safe"),
        ("hi", "घर के अंदर रहें और सुरक्षित रहें"),
        ("pa", "ਘਰ ਦੇ ਅੰਦਰ ਰਹੋ ਅਤੇ ਸੁਰੱਖਿਤ ਰਹੋ"),
        ("ks", "گھر کے اندر رہیں اور محفوظ رہیں"),
        ("doi", "घरे दे अंदर रओ ते सुरक्षित रओ"),
        ("gu", "ઘરની અંદર રહો અને સુરક્ષિત રહો"),
        ("te", "ఇంట్లోనే ఉండి సురక్షితంగా ఉండండి"),
        ("ta", "வீட்டிற்குள் இருந்து பாதுகாப்பாக இருங்கள்"),
        ("kn", "ಮನೆಯೊಳಗೇ ಇರಿ ಮತ್ತು ಸುರಕ್ಷಿತವಾಗಿರಿ"),
        ("ml", "വീടിനുള്ളിൽ തന്നെ സുരക്ഷിതമായി കഴിയുക"),
    ]),
    ("emergencySupplies", &[
        ("en", "Prepare emergency supplies"),
        ("hi", "आपातकालीन सामान तैयार करें"),
        ("pa", "ਐਮਰਜੈਂਸੀ ਸਪਲਾਈ ਤਿਆਰ ਕਰੋ"),
        ("ks", "ہنگامی سامان تیار کریں"),
        ("doi", "आपातकालीन सामान तैयार करो"),
        ("gu", "કટોકટીની સામગ્રી તૈયાર કરો"),
        ("te", "అత్యవసర సామాగ్రిని సిద్ధం చేయండి"),
        ("ta", "அவசரகால பொருட்களை தயார் செய்யுங்கள்"),
        ("kn", "ತುರ್ತು ಸರಬರಾಜುಗಳನ್ನು ಸಿದ್ಧಪಡಿಸಿ"),
        ("ml", "അടിയന്തര സാധനങ്ങൾ തയ്യാറാക്കുക"),
    ]),
    ("prediction", &[
        ("en", "Weather Prediction"),
        ("hi", "मौसम पूर्वानुमान"),
        ("pa", "ਮੌਸਮ ਦੀ ਭਵਿੱਖਬਾਣੀ"),
        ("ks", "موسمی پیشن گوئی"),
        ("doi", "मौसम भविष्यवाणी"),
        ("gu", "હવામાન આગાહી"),
        ("te", "వాతావరణ అంచనా"),
        ("ta", "வானிலை முன்னறிவிப்பு"),
        ("kn", "ಹವಾಮಾನ ಮುನ್ನೋಟ"),
        ("ml", "കാലാവസ്ഥാ പ്രവചനം"),
    ]),
    ("immediateActions", &[
        ("en", "Immediate Actions"),
    ]),
    ("preparedness", &[
        ("en", "Preparedness"),
    ]),
    ("vulnerablePopulations", &[
        ("en", "Vulnerable Populations"),
    ]),
    ("resourceAllocation", &[
        ("en", "Resource Allocation"),
    ]),
    ("communitySupport", &[
        ("en", "Community Support"),
    ]),
];

// ============================================================================
// Risk phrases (English phrase → translations)
// ============================================================================

pub static PHRASES: &[(&str, Translations)] = &[
    ("High Risk", &[
        ("hi", "उच्च जोखिम"),
        ("pa", "ਉੱਚ ਜੋਖਮ"),
        ("gu", "ઉચ્ચ જોખમ"),
        ("te", "అధిక ప్రమాదం"),
        ("ta", "அதிக ஆபத்து"),
        ("kn", "ಹೆಚ್ಚಿನ ಅಪಾಯ"),
        ("ml", "ഉയർന്ന അപകടസാധ്യത"),
    ]),
    ("Medium Risk", &[
        ("hi", "मध्यम जोखिम"),
        ("pa", "ਮੱਧਮ ਜੋਖਮ"),
        ("gu", "મધ્યમ જોખમ"),
        ("te", "మధ్యస్థ ప్రమాదం"),
        ("ta", "நடுத்தர ஆபத்து"),
        ("kn", "ಮಧ್ಯಮ ಅಪಾಯ"),
        ("ml", "ഇടത്തരം അപകടസാധ്യത"),
    ]),
    ("Low Risk", &[
        ("hi", "कम जोखिम"),
        ("pa", "ਘੱਟ ਜੋਖਮ"),
        ("gu", "ઓછું જોખમ"),
        ("te", "తక్కువ ప్రమాదం"),
        ("ta", "குறைந்த ஆபத்து"),
        ("kn", "ಕಡಿಮೆ ಅಪಾಯ"),
        ("ml", "കുറഞ്ഞ അപകടസാധ്യത"),
    ]),
];

// ============================================================================
// Regional alerts (region, event key, translations)
// ============================================================================

pub static REGIONAL_ALERTS: &[(&str, &str, Translations)] = &[
    ("Mumbai, Maharashtra", "monsoon", &[
        ("hi", "मुंबई में भारी बारिश की चेतावनी। स्थानीय ट्रेन सेवा प्रभावित हो सकती है।"),
        ("gu", "મુંબઈમાં ભારે વરસાદની ચેતવણી. સ્થાનિક ટ્રેન સેવા પ્રભાવિત થઈ શકે છે."),
        ("en", "Heavy rainfall warning in Mumbai. Local train services may be affected."),
    ]),
    ("Mumbai, Maharashtra", "cyclone", &[
        ("hi", "मुंबई तट पर चक्रवात का खतरा। तटीय इलाकों से दूर रहें।"),
        ("gu", "મુંબઈ કિનારે ચક્રવાતનો ખતરો. દરિયાકિનારાના વિસ્તારોથી દૂર રહો."),
        ("en", "Cyclone threat on Mumbai coast. Stay away from coastal areas."),
    ]),
    ("Chennai, Tamil Nadu", "cyclone", &[
        ("ta", "சென்னையில் சூறாவளி எச்சரிக்கை। கடற்கரை பகுதிகளை விட்டு வெளியேறுங்கள்।"),
        ("te", "చెన్నైలో తుఫాను హెచ్చరిక. తీర ప్రాంతాలను వదిలి వెళ్లండి."),
        ("en", "Cyclone warning in Chennai. Evacuate coastal areas immediately."),
    ]),
    ("Chennai, Tamil Nadu", "flood", &[
        ("ta", "சென்னையில் வெள்ளப்பெருக்கு எச்சரிக்கை। தாழ்வான பகுதிகளை விட்டு வெளியேறுங்கள்।"),
        ("te", "చెన్నైలో వరద హెచ్చరిక. లోతట్టు ప్రాంతాలను వదిలి వెళ్లండి."),
        ("en", "Flood warning in Chennai. Evacuate low-lying areas."),
    ]),
    ("Kolkata, West Bengal", "cyclone", &[
        ("hi", "कोलकाता में चक्रवात की चेतावनी। सुंदरबन क्षेत्र से निकलें।"),
        ("bn", "কলকাতায় ঘূর্ণিঝড়ের সতর্কতা। সুন্দরবন এলাকা ছেড়ে চলে যান।"),
        ("en", "Cyclone warning in Kolkata. Evacuate Sundarbans area."),
    ]),
    ("Bhubaneswar, Odisha", "cyclone", &[
        ("hi", "भुवनेश्वर में चक्रवात अलर्ट। तटीय गांवों को खाली करें।"),
        ("en", "Cyclone alert in Bhubaneswar. Evacuate coastal villages."),
    ]),
    ("Kochi, Kerala", "monsoon", &[
        ("ml", "കൊച്ചിയിൽ കനത്ത മഴയ്ക്ക് സാധ്യത. കായൽ പ്രദേശങ്ങളിൽ ജാഗ്രത പാലിക്കുക."),
        ("en", "Heavy rainfall expected in Kochi. Exercise caution in backwater areas."),
    ]),
    ("Srinagar, Kashmir", "snowstorm", &[
        ("ks", "سرینگر میں برف کا طوفان۔ گھروں میں رہیں۔"),
        ("hi", "श्रीनगर में बर्फीला तूफान। घरों में रहें।"),
        ("en", "Snowstorm in Srinagar. Stay indoors."),
    ]),
    ("Jammu, Jammu & Kashmir", "heatwave", &[
        ("doi", "जम्मू च गर्मी दी लहर। पानी पीते रओ।"),
        ("hi", "जम्मू में गर्मी की लहर। पानी पीते रहें।"),
        ("en", "Heatwave in Jammu. Keep drinking water."),
    ]),
];

// ============================================================================
// Localized recommendations (event key → language → actions)
// ============================================================================

pub static RECOMMENDATIONS: &[(&str, &[(&str, &[&str])])] = &[
    ("cyclone", &[
        ("en", &[
            "Move to a safe location immediately",
            "Keep an emergency kit ready",
            "Follow instructions from local authorities",
        ]),
        ("hi", &["तुरंत सुरक्षित स्थान पर जाएं", "आपातकालीन किट तैयार रखें", "स्थानीय अधिकारियों के निर्देशों का पालन करें"]),
        ("pa", &["ਤੁਰੰਤ ਸੁਰੱਖਿਤ ਜਗ੍ਹਾ ਤੇ ਜਾਓ", "ਐਮਰਜੈਂਸੀ ਕਿੱਟ ਤਿਆਰ ਰੱਖੋ", "ਸਥਾਨਕ ਅਧਿਕਾਰੀਆਂ ਦੇ ਨਿਰਦੇਸ਼ਾਂ ਦਾ ਪਾਲਣ ਕਰੋ"]),
        ("gu", &["તાત્કાલિક સુરક્ષિત સ્થળે જાઓ", "કટોકટીની કિટ તૈયાર રાખો", "સ્થાનિક અધિકારીઓના નિર્દેશોનું પાલન કરો"]),
        ("te", &["వెంటనే సురక్షిత ప్రాంతానికి వెళ్లండి", "అత్యవసర కిట్ సిద్ధంగా ఉంచండి", "స్థానిక అధికారుల సూచనలను అనుసరించండి"]),
        ("ta", &[
            "உடனே பாதுகாப்பான இடத்திற்கு செல்லுங்கள்",
            "அவசரகால கிட் தயாராக வைத்திருங்கள்",
            "உள்ளூர் அதிகாரிகளின் வழிகாட்டுதல்களைப் பின்பற்றுங்கள்",
        ]),
        ("kn", &["ತಕ್ಷಣ ಸುರಕ್ಷಿತ ಸ್ಥಳಕ್ಕೆ ಹೋಗಿ", "ತುರ್ತು ಕಿಟ್ ಸಿದ್ಧವಾಗಿ ಇರಿಸಿ", "ಸ್ಥಳೀಯ ಅಧಿಕಾರಿಗಳ ಸೂಚನೆಗಳನ್ನು ಅನುಸರಿಸಿ"]),
        ("ml", &["ഉടനെ സുരക്ഷിത സ്ഥലത്തേക്ക് പോകുക", "അടിയന്തര കിറ്റ് തയ്യാറാക്കി വയ്ക്കുക", "പ്രാദേശിക അധികാരികളുടെ നിർദ്ദേശങ്ങൾ പാലിക്കുക"]),
    ]),
    ("flood", &[
        ("en", &[
            "Move to higher ground",
            "Stay away from electrical equipment",
            "Store clean drinking water",
        ]),
        ("hi", &["ऊंची जगह पर जाएं", "बिजली के उपकरणों से दूर रहें", "साफ पानी स्टोर करें"]),
        ("ta", &["உயரமான இடத்திற்கு செல்லுங்கள்", "மின் சாதனங்களிலிருந்து விலகி இருங்கள்", "சுத்தமான தண்ணீரை சேமித்து வைக்கவும்"]),
        ("ml", &["ഉയർന്ന സ്ഥലത്തേക്ക് പോകുക", "വൈദ്യുത ഉപകരണങ്ങളിൽ നിന്ന് അകന്നു നിൽക്കുക", "ശുദ്ധജലം സംഭരിക്കുക"]),
    ]),
];

// ============================================================================
// Regional factors (state → factors)
// ============================================================================

pub static REGIONAL_FACTORS: &[(&str, &[&str])] = &[
    ("Maharashtra", &["Urban heat islands", "Coastal vulnerability", "Dense population"]),
    ("West Bengal", &["River delta system", "Cyclone corridor", "Agricultural dependency"]),
    ("Kerala", &["Backwater systems", "Monsoon intensity", "Hilly terrain"]),
    ("Odisha", &["Cyclone-prone coast", "Tribal communities", "Agricultural economy"]),
];

/// Used when a region's state has no entry
pub static DEFAULT_REGIONAL_FACTORS: &[&str] = &[
    "Regional climate patterns",
    "Local geography",
    "Community structures",
];

// ============================================================================
// Ethical guidance (aspect key → translations)
// ============================================================================

pub static ETHICAL_GUIDANCE: &[(&str, Translations)] = &[
    ("vulnerablePopulations", &[
        ("en", "Prioritize elderly, disabled, and children in evacuation plans"),
        ("hi", "निकासी योजनाओं में बुजुर्गों, विकलांगों और बच्चों को प्राथमिकता दें"),
        ("ta", "வெளியேற்ற திட்டங்களில் முதியவர்கள், மாற்றுத்திறனாளிகள் மற்றும் குழந்தைகளுக்கு முன்னுரிமை கொடுங்கள்"),
        ("te", "తరలింపు ప్రణాళికలలో వృద్ధులు, వికలాంగులు మరియు పిల్లలకు ప్రాధాన్యత ఇవ్వండి"),
        ("ml", "ഒഴിപ്പിക്കൽ പദ്ധതികളിൽ പ്രായമായവർ, വികലാംഗർ, കുട്ടികൾ എന്നിവർക്ക് മുൻഗണന നൽകുക"),
    ]),
    ("resourceAllocation", &[
        ("en", "Ensure equitable distribution of emergency resources"),
        ("hi", "आपातकालीन संसाधनों का न्यायसंगत वितरण सुनिश्चित करें"),
        ("ta", "அவசரகால வளங்களின் சமமான விநியோகத்தை உறுதி செய்யுங்கள்"),
        ("te", "అత్యవసర వనరుల సమాన పంపిణీని నిర్ధారించండి"),
        ("ml", "അടിയന്തര വിഭവങ്ങളുടെ തുല്യമായ വിതരണം ഉറപ്പാക്കുക"),
    ]),
    ("communitySupport", &[
        ("en", "Strengthen community networks and mutual aid systems"),
        ("hi", "सामुदायिक नेटवर्क और पारस्परिक सहायता प्रणालियों को मजबूत करें"),
        ("ta", "சமூக வலைப்பின்னல்கள் மற்றும் பரஸ்பர உதவி அமைப்புகளை வலுப்படுத்துங்கள்"),
        ("te", "కమ్యూనిటీ నెట్‌వర్క్‌లు మరియు పరస్పర సహాయ వ్యవస్థలను బలోపేతం చేయండి"),
        ("ml", "കമ്മ്യൂണിറ്റി നെറ്റ്‌വർക്കുകളും പരസ്പര സഹായ സംവിധാനങ്ങളും ശക്തിപ്പെടുത്തുക"),
    ]),
];

/// Used when an aspect has no guidance in any language
pub static DEFAULT_ETHICAL_GUIDANCE: &str = "Follow ethical guidelines";

// ============================================================================
// Economic sectors (region → language → sectors)
// ============================================================================

pub static ECONOMIC_SECTORS: &[(&str, &[(&str, &[&str])])] = &[
    ("Mumbai, Maharashtra", &[
        ("en", &["Financial Services", "Textiles", "Entertainment", "Shipping"]),
        ("hi", &["वित्तीय सेवाएं", "वस्त्र", "मनोरंजन", "पोत परिवहन"]),
        ("gu", &["નાણાકીય સેવાઓ", "કાપડ", "મનોરંજન", "શિપિંગ"]),
    ]),
    ("Chennai, Tamil Nadu", &[
        ("en", &["Automobile", "IT Services", "Healthcare", "Leather"]),
        ("ta", &["வாகனத் தொழில்", "தகவல் தொழில்நுட்ப சேவைகள்", "சுகாதாரம்", "தோல் தொழில்"]),
        ("te", &["ఆటోమొబైల్", "ఐటి సేవలు", "ఆరోగ్య సంరక్షణ", "తోలు"]),
    ]),
    ("Kochi, Kerala", &[
        ("en", &["Spices Trade", "Marine Products", "Tourism", "IT"]),
        ("ml", &["മസാല വ്യാപാരം", "സമുദ്ര ഉൽപ്പന്നങ്ങൾ", "ടൂറിസം", "ഐടി"]),
        ("ta", &["மசாலா வர்த்தகம்", "கடல் உற்பத்திகள்", "சுற்றுலா", "தகவல் தொழில்நுட்பம்"]),
    ]),
];

/// Used for regions without a sector profile
pub static DEFAULT_ECONOMIC_SECTORS: &[&str] = &["Agriculture", "Services", "Manufacturing"];

// ============================================================================
// Community resources (language → resources)
// ============================================================================

pub static COMMUNITY_RESOURCES: &[(&str, &[&str])] = &[
    ("en", &["Community Centers", "Religious Institutions", "Schools", "Hospitals"]),
    ("hi", &["सामुदायिक केंद्र", "धार्मिक संस्थान", "स्कूल", "अस्पताल"]),
    ("ta", &["சமூக மையங்கள்", "மத நிறுவனங்கள்", "பள்ளிகள்", "மருத்துவமனைகள்"]),
    ("te", &["కమ్యూనిటీ సెంటర్లు", "మత సంస్థలు", "పాఠశాలలు", "ఆసుపత్రులు"]),
    ("ml", &["കമ്മ്യൂണിറ്റി സെന്ററുകൾ", "മത സ്ഥാപനങ്ങൾ", "സ്കൂളുകൾ", "ആശുപത്രികൾ"]),
    ("gu", &["સામુદાયિક કેન્દ્રો", "ધાર્મિક સંસ્થાઓ", "શાળાઓ", "હોસ્પિટલો"]),
    ("pa", &["ਕਮਿਊਨਿਟੀ ਸੈਂਟਰ", "ਧਾਰਮਿਕ ਸੰਸਥਾਵਾਂ", "ਸਕੂਲ", "ਹਸਪਤਾਲ"]),
    ("kn", &["ಸಮುದಾಯ ಕೇಂದ್ರಗಳು", "ಧಾರ್ಮಿಕ ಸಂಸ್ಥೆಗಳು", "ಶಾಲೆಗಳು", "ಆಸ್ಪತ್ರೆಗಳು"]),
];
