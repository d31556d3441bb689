//! Compiled-in site content.
//!
//! This is what the public site shows before anything has been saved from
//! the admin console, and what a partial persisted document is completed
//! from.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::site::{
    Card, Conclusions, Contact, ContactForm, CtaButton, Footer, FormField, Gallery, GalleryItem,
    Hero, Link, LinkGroup, ProjectScope, Records, Research, ResearchArea, SiteConfig,
    SocialLinks, Strings, Summary, SummaryCards, Team, TeamMember,
};
use crate::types::{CtaVariant, GalleryKind};

fn strings(items: &[&str]) -> Strings {
    Arc::new(items.iter().map(|s| s.to_string()).collect())
}

fn records<T>(items: Vec<T>) -> Records<T> {
    Arc::new(items.into_iter().map(Arc::new).collect())
}

fn card(title: &str, content: &str) -> Arc<Card> {
    Arc::new(Card {
        title: title.into(),
        content: content.into(),
    })
}

fn link(text: &str, href: &str) -> Link {
    Link {
        text: text.into(),
        href: href.into(),
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "BeCore ATF".into(),
            project_name: "BeCore".into(),
            tagline: "UO₂–UBe₁₃ Katkılı Kaza Toleranslı Yakıt".into(),
            description: "BeCore, berilyum katkılı yenilikçi ATF konseptiyle nükleer güvenliği ve verimliliği artırmayı hedefleyen yerli bir yakıt tasarımıdır.".into(),
            hero: Arc::new(default_hero()),
            summary: Arc::new(default_summary()),
            research: Arc::new(default_research()),
            team: Arc::new(default_team()),
            gallery: Arc::new(default_gallery()),
            contact: Arc::new(default_contact()),
            footer: Arc::new(default_footer()),
        }
    }
}

fn default_hero() -> Hero {
    Hero {
        title: "BeCore — UO₂–UBe₁₃ ATF".into(),
        subtitle: "Türkiye’de geliştirilen özgün, güvenli ve yenilikçi nükleer yakıt tasarımı".into(),
        typewriter_slogans: strings(&[
            "Kaza Toleranslı Yakıt Çözümü",
            "Yüksek Termal İletkenlik",
            "SMR Uyumlu Yenilikçi Tasarım",
        ]),
        badges: strings(&["UO₂–UBe₁₃", "ATF Konsepti", "SMR Uyumlu", "Yüksek Güvenlik"]),
        cta_buttons: records(vec![
            CtaButton {
                text: "Proje Özeti".into(),
                href: "#summary".into(),
                variant: CtaVariant::Primary,
            },
            CtaButton {
                text: "Araştırma".into(),
                href: "#research".into(),
                variant: CtaVariant::Secondary,
            },
        ]),
    }
}

fn default_summary() -> Summary {
    Summary {
        title: "Proje Özeti".into(),
        cards: Arc::new(SummaryCards {
            problem: card(
                "Problem",
                "Geleneksel UO₂–Zr yakıt sistemleri yüksek sıcaklıklarda hidrojen üretimi ve düşük termal iletkenlik nedeniyle güvenlik riski taşır.",
            ),
            solution: card(
                "Çözüm",
                "BeCore, UO₂ matrisine UBe₁₃ katkısı ile geliştirilmiş ATF konsepti sunar. Yüksek ısıl iletkenlik, düşük oksijen salımı ve güvenli kaza davranışı sağlar.",
            ),
            impact: card(
                "Etki",
                "SMR ve MMR tasarımlarına uygun, yerlileştirilmiş yeni bir yakıt çözümü. Güvenlik marjında artış ve ekonomik verimlilik.",
            ),
        }),
        description: "BeCore ATF yakıtı, UO₂–UBe₁₃ kompoziti ile termal iletkenlik ve nötronik performansı iyileştirerek kaza toleransını artırır. NuScale SMR modeli üzerinde Serpent ve COBRA-IV ile yapılan analizler, güvenlik ve verimlilik açısından konseptin uygulanabilir olduğunu göstermektedir.".into(),
        highlights: strings(&[
            "UBe₁₃ katkısıyla termal iletkenlik artışı",
            "Nötronik kararlılık ve yüksek yanma performansı",
            "Düşük oksijen/hidrojen üretimi",
            "Kritiklik ve reaktivite güvenliği",
            "Yerli teknoloji altyapısına uyum",
            "HI-STORM: 5 yıl soğutma sonrası 24 demet için 9.31 kW ısı",
        ]),
    }
}

fn default_research() -> Research {
    Research {
        title: "Araştırma & Analiz Çalışmaları".into(),
        description: "UO₂–UBe₁₃ ATF konseptimiz, kapsamlı disiplinlerarası analizlerle değerlendirilmiştir. NuScale SMR modeli üzerinde gerçekleştirilen nötronik, termohidrolik, güvenlik ve atık yönetimi analizleri, yakıtın uygulanabilirliğini kanıtlamıştır.".into(),
        areas: records(vec![
            ResearchArea {
                name: "Nötronik Performans Analizi".into(),
                title: "Nötronik Performans Analizi".into(),
                description: "UBe₁₃ katkısının reaktivite ve çoğalma faktörü üzerine etkilerinin incelenmesi".into(),
                icon: "atom".into(),
                methodology: "SERPENT Monte Carlo kodu ile birim hücre ve kanal modellemeleri gerçekleştirildi".into(),
                key_findings: strings(&[
                    "UBe₁₃ nötronik açıdan kayıp oluşturmamaktadır",
                    "Zenginlik ihtiyacı doğurmayarak maliyet avantajı sağlar",
                    "Çoklu zenginlik değerleriyle tutarlı davranış sergiler",
                    "Farklı reaktör tiplerinde uygulanabilirlik potansiyeli",
                ]),
                software: strings(&["SERPENT Monte Carlo", "MCNP", "Geometry Modeling"]),
                findings: "UBe₁₃ nötronik açıdan kayıp oluşturmamaktadır ve zenginlik ihtiyacı doğurmayarak maliyet avantajı sağlar.".into(),
                conclusion: "UO₂–UBe₁₃ yakıtı, geleneksel UO₂ yakıtına kıyasla nötronik kayıp olmadan gelişmiş performans sunmaktadır.".into(),
                results: "UO₂–UBe₁₃ yakıtı, geleneksel UO₂ yakıtına kıyasla nötronik kayıp olmadan gelişmiş performans sunmaktadır.".into(),
            },
            ResearchArea {
                name: "Termohidrolik & Isı Transfer".into(),
                title: "Termohidrolik & Isı Transfer".into(),
                description: "Yakıt merkez sıcaklığı ve ısıl iletkenlik özelliklerinin analizi".into(),
                icon: "thermometer".into(),
                methodology: "COBRA-IV/TF alt kanal analiz kodu ile NuScale geometrisi modellenmiştir".into(),
                key_findings: strings(&[
                    "UBe₁₃ katkısı ile yakıt merkez sıcaklığı belirgin şekilde düşürülmüştür",
                    "Özgül ısı kapasitesi artışı ile ani güç değişimlerine karşı kararlılık",
                    "Maxwell-Eucken modeli ile ısıl iletkenlik %20-30 artış",
                    "Reaktivite giriş kazalarında gelişmiş tolerans",
                ]),
                software: strings(&["COBRA-IV/TF", "COBRA-TF", "ZEBRA", "CFD Analysis"]),
                findings: "UBe₁₃ katkısı ile yakıt merkez sıcaklığı belirgin şekilde düşürülmüştür ve Maxwell-Eucken modeli ile ısıl iletkenlik %20-30 artış gözlenmiştir.".into(),
                conclusion: "Berilyumun yüksek ısıl iletkenliği sayesinde yakıt güvenlik marjları önemli ölçüde artırılmıştır.".into(),
                results: "Berilyumun yüksek ısıl iletkenliği sayesinde yakıt güvenlik marjları önemli ölçüde artırılmıştır.".into(),
            },
            ResearchArea {
                name: "Güvenlik & Kaza Analizi".into(),
                title: "Güvenlik & Kaza Analizi".into(),
                description: "Akış azalması ve reaktivite kazası senaryolarının değerlendirilmesi".into(),
                icon: "shield".into(),
                methodology: "COBRA-TF ile kaza modellemesi ve güvenlik analizi yapılmıştır".into(),
                key_findings: strings(&[
                    "Değişen güç profiline karşı gelişmiş tolerans",
                    "Kritik ısı akısı (CHF) performansında iyileşme",
                    "UO₂ ile termal uyumluluk ve yapısal kararlılık",
                    "Fisyon gazı salınımında azalma",
                ]),
                software: strings(&["COBRA-TF", "RELAP5", "Safety Analysis Codes"]),
                findings: "Değişen güç profiline karşı gelişmiş tolerans ve kritik ısı akısı (CHF) performansında iyileşme gözlenmiştir.".into(),
                conclusion: "UBe₁₃ katkılı yakıt, kaza koşullarında geleneksel yakıta göre daha güvenli davranış sergilemektedir.".into(),
                results: "UBe₁₃ katkılı yakıt, kaza koşullarında geleneksel yakıta göre daha güvenli davranış sergilemektedir.".into(),
            },
            ResearchArea {
                name: "Atık Yönetimi & Çevresel Etki".into(),
                title: "Atık Yönetimi & Çevresel Etki".into(),
                description: "Kullanılmış yakıt depolama ve radyolojik yayılım analizi".into(),
                icon: "archive".into(),
                methodology: "HI-STORM kuru depolama sistemi TRIPOLI-4 ile modellenmiş, JRODOS ile meteorolojik yayılım simülasyonu yapılmıştır".into(),
                key_findings: strings(&[
                    "5 yıl soğutma sonrası 24 demet için 9.31 kW bozunma ısısı",
                    "Doz hızları IAEA limitlerinin altında kalarak güvenli depolama",
                    "Etkin doz değerlerinde %10 artış (2.95×10⁴ vs 2.66×10⁴ mSv)",
                    "Birikim değerlerinde artış (3.83×10⁹ vs 3.45×10⁹ Bq/m²)",
                ]),
                software: strings(&["TRIPOLI-4", "KORIGEN", "HI-STORM Modeling", "JRODOS"]),
                findings: "5 yıl soğutma sonrası 24 demet için 9.31 kW bozunma ısısı ve doz hızları IAEA limitlerinin altında kalarak güvenli depolama sağlanmıştır.".into(),
                conclusion: "UBe₁₃ yakıtı mevcut depolama sistemleriyle uyumlu olup, çevresel etki açısından kontrollü artış gözlenmiş, ek güvenlik önlemleri belirlenmiştir.".into(),
                results: "UBe₁₃ yakıtı mevcut depolama sistemleriyle uyumlu olup, çevresel etki açısından kontrollü artış gözlenmiş, ek güvenlik önlemleri belirlenmiştir.".into(),
            },
        ]),
        project_scope: Arc::new(ProjectScope {
            title: "Proje Kapsamı & Model Seçimi".into(),
            description: "NuScale US600 SMR modeli referans alınarak kapsamlı analiz gerçekleştirilmiştir".into(),
            highlights: strings(&[
                "160 MWt çekirdek termal gücü",
                "12.76 MPa sistem basıncı",
                "37 yakıt demeti, 17x17 tasarım",
                "Doğal konveksiyonlu pasif soğutma",
                "PWR tabanlı güvenilir teknoloji",
            ]),
        }),
        conclusions: Arc::new(Conclusions {
            title: "Sonuçlar & Değerlendirme".into(),
            items: strings(&[
                "UBe₁₃ katkısı nötronik kayıp olmadan termal performansı önemli ölçüde artırmaktadır",
                "Yakıt güvenlik marjları kaza toleranslı yakıt (ATF) kriterlerini karşılamaktadır",
                "Maxwell-Eucken modeli ile hesaplanan ısıl iletkenlik artışı deneysel doğrulama gerektirmektedir",
                "Atık yönetimi açısından mevcut altyapılar kullanılabilir, ek önlemler planlanmalıdır",
                "Çevresel etki artışı kontrollü seviyede olup, geliştirilmiş güvenlik protokolleri yeterlidir",
                "Yerli teknoloji geliştirme açısından potansiyel taşımaktadır",
            ]),
        }),
    }
}

fn member(
    name: &str,
    role: &str,
    expertise: &str,
    avatar: &str,
    linkedin: &str,
    specialties: &[&str],
) -> TeamMember {
    TeamMember {
        name: name.into(),
        role: role.into(),
        expertise: expertise.into(),
        avatar: Some(avatar.into()),
        is_mentor: None,
        linkedin: Some(linkedin.into()),
        email: None,
        website: None,
        specialties: Some(strings(specialties)),
    }
}

fn default_team() -> Team {
    let mut kaan = member(
        "Kaan Koç",
        "Yazılım ve Otomasyon",
        "Termohidrolik ve Alt Kanal Analizleri, Nötronik Analiz, Yazılım Geliştirme, Mobil Uygulama Geliştirme, Web Arayüz Tasarımı",
        "/src/assets/images/kaan.png",
        "https://www.linkedin.com/in/xkaankoc",
        &["Python, Dart, Flutter", "HTML, CSS, JavaScript", "ZEBRA, Serpent"],
    );
    kaan.website = Some("https://khankoc.github.io".into());

    Team {
        title: "BeCore Ekibimiz".into(),
        members: records(vec![
            member(
                "Ahmet Kaan Mercan",
                "Danışman",
                "Nükleer Kazalar, Ciddi Kazalar Fenomeni, Radyolojik Dağılım ve Radyolojik Etki Modelleri, Alt Kanal Analizleri, Nükleer Güvenlik Analizleri",
                "/src/assets/images/ahmet.png",
                "https://www.linkedin.com/in/ahmet-ka%C4%9Fan-mercan-188577140",
                &["Doktora: KIT Almanya", "KORIGEN & JRODOS", "Monte Carlo Simülasyonları"],
            ),
            member(
                "Furkan Sezgin Öztürk",
                "Kaptan",
                "Termohidrolik ve Alt Kanal Analizleri, Radyasyon Zırhlama, Nötronik Analiz, Nükleer Yakıt Performans Analizi, Görüntü Analizi",
                "/src/assets/images/furkan.png",
                "https://www.linkedin.com/in/furkan-sezgin-öztürk-1149a9209",
                &["COBRA-IV, COBRA-TF, ZEBRA", "Tripoli-4, Serpent", "FINIX, Python, C"],
            ),
            member(
                "Nurettin Serhat Evren",
                "Reaktör Fiziği",
                "Termohidrolik ve Alt Kanal Analizleri, Radyasyon Zırhlama, Nötronik Analiz, Görüntü Analizi, Teknik Çizim",
                "/src/assets/images/nurettin.png",
                "https://www.linkedin.com/in/nurettin-serhat-evren-a68103229",
                &["COBRA-IV, COBRA-TF, ZEBRA", "Tripoli-4, Serpent", "Python, C, Java, 3D Max"],
            ),
            member(
                "Çağrı Kaan Sönmez",
                "Termohidrolik ve Isı Analizi",
                "Termohidrolik ve Alt Kanal Analizleri, Radyasyon Zırhlama, Reaktör Kinetiği ve Kontrolü",
                "/src/assets/images/cagri.png",
                "https://www.linkedin.com/in/çağrı-kaan-sönmez-a49172280",
                &["COBRA-4, COBRA-TF, ZEBRA", "Tripoli-4", "Simulink"],
            ),
            kaan,
            member(
                "Umut Sağır",
                "Nükleer Yakıt Malzemeleri",
                "Gelişmiş Yakıt Tasarımları, Radyolojik Dağılımın Karşılaştırmalı Analizi, Nötronik Analiz, Görüntü Analizi, Teknik Çizim",
                "/src/assets/images/umut.png",
                "https://www.linkedin.com/in/umut-sa%C4%9F%C4%B1r-069525230",
                &["KORIGEN & JRODOS", "Serpent", "Novisim, ImageJ, AutoCAD"],
            ),
            member(
                "Bahar Muşluoğlu",
                "Nükleer Yakıt Malzemeleri",
                "Gelişmiş Yakıt Tasarımları, Radyolojik Dağılımın Karşılaştırmalı Analizi, Görüntü Analizi, Teknik Çizim, Nötronik Analiz",
                "/src/assets/images/bahar.png",
                "https://www.linkedin.com/in/bahar-mu%C5%9Fluo%C4%9Flu-a33b041b2",
                &["KORIGEN & JRODOS", "Novisim, ImageJ", "AutoCAD, Serpent", "MATLAB"],
            ),
            member(
                "Betül Karcan",
                "Reaktör Güvenliği",
                "Radyolojik Dağılımın Karşılaştırmalı Analizi, Termohidrolik ve Alt Kanal Analizleri, Nötronik Analiz, Kodlama",
                "/src/assets/images/betul.png",
                "https://www.linkedin.com/in/betulkarcan",
                &["KORIGEN & JRODOS", "COBRA-IV, COBRA-TF, ZEBRA", "Serpent, Python, MATLAB"],
            ),
        ]),
        mentor: None,
    }
}

fn gallery_image(id: &str, title: &str, description: &str, image: &str) -> GalleryItem {
    GalleryItem {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        image: image.into(),
        kind: GalleryKind::Image,
    }
}

fn default_gallery() -> Gallery {
    Gallery {
        title: "Galeri & Demo".into(),
        description: Some("Analiz çıktılarımız ve modelleme örnekleri. SiC/Cr kaplama gibi klasik ATF alternatifleriyle kıyaslarda UO₂–UBe₁₃ konseptinin avantajlarını görselleştiriyoruz.".into()),
        items: records(vec![
            gallery_image(
                "simulation-1",
                "SERPENT Nötronik Analizi",
                "UO₂ ve UO₂–UBe₁₃ yakıtları için çoğalma faktörü ve reaktivite sonuçları",
                "/images/serpent-simulation.jpg",
            ),
            gallery_image(
                "thermal-1",
                "COBRA-IV Termal Analiz",
                "NuScale SMR kanalı üzerinde yakıt merkez/surface sıcaklık karşılaştırmaları",
                "/images/cobra-analysis.jpg",
            ),
            gallery_image(
                "storage-1",
                "HI-STORM Depolama",
                "TRIPOLI-4 ile gama doz oranlarının incelenmesi ve güvenlik analizi",
                "/images/historm-storage.jpg",
            ),
            gallery_image(
                "accident-1",
                "JRODOS Kaza Yayılımı",
                "UO₂–UBe₁₃ yakıtı için olası kaza senaryolarında radyolojik dağılım",
                "/images/jrodos-accident.jpg",
            ),
        ]),
    }
}

fn default_contact() -> Contact {
    let fields: BTreeMap<String, Arc<FormField>> = [
        ("name", "Ad Soyad", "Adınızı ve soyadınızı girin"),
        ("email", "E-posta", "E-posta adresinizi girin"),
        ("subject", "Konu", "Mesaj konusunu girin"),
        ("message", "Mesaj", "Mesajınızı buraya yazın..."),
    ]
    .into_iter()
    .map(|(key, label, placeholder)| {
        (
            key.to_string(),
            Arc::new(FormField {
                label: label.into(),
                placeholder: placeholder.into(),
            }),
        )
    })
    .collect();

    Contact {
        title: "İletişim".into(),
        description: "BeCore ekibiyle Teknofest, akademik işbirlikleri veya endüstriyel projeler için iletişime geçebilirsiniz.".into(),
        email: "becore@teknofest.edu.tr".into(),
        social_links: Arc::new(SocialLinks {
            github: Some("https://github.com/becore-atf".into()),
            linkedin: Some("https://linkedin.com/company/becore-atf".into()),
            twitter: None,
        }),
        location: "Türkiye".into(),
        institution: "BeCore — Başvuru ID: 3634262".into(),
        form: Arc::new(ContactForm {
            title: "Mesaj Gönderin".into(),
            subtitle: "Projelerimiz hakkında bilgi almak veya işbirliği teklifinde bulunmak için bizimle iletişime geçin.".into(),
            fields: Arc::new(fields),
            submit_button: "Mesaj Gönder".into(),
            success_message: "Mesajınız başarıyla gönderildi! En kısa sürede size dönüş yapacağız.".into(),
            error_message: "Mesaj gönderilirken bir hata oluştu. Lütfen tekrar deneyin.".into(),
        }),
    }
}

fn default_footer() -> Footer {
    Footer {
        description: "BeCore, Türkiye'de geliştirilen özgün, güvenli ve yenilikçi nükleer yakıt tasarımıdır.".into(),
        links: records(vec![
            LinkGroup {
                title: "Proje".into(),
                items: records(vec![
                    link("Özet", "#summary"),
                    link("Araştırma", "#research"),
                    link("Ekip", "#team"),
                    link("Galeri", "#gallery"),
                ]),
            },
            LinkGroup {
                title: "İletişim".into(),
                items: records(vec![
                    link("Mesaj Gönder", "#contact"),
                    link("LinkedIn", "https://linkedin.com/company/becore-atf"),
                    link("GitHub", "https://github.com/becore-atf"),
                ]),
            },
        ]),
        copyright: "© 2024 BeCore ATF. Tüm hakları saklıdır.".into(),
    }
}
