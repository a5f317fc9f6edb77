//! Built-in movie listings
//!
//! Every movie is playable from two embed hosts keyed by its TMDB id.

use crate::models::Movie;

const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Movie listings grouped the way the movies screen shows them
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    pub popular: Vec<Movie>,
    pub recent: Vec<Movie>,
    pub top_rated: Vec<Movie>,
    /// Genre picks followed by the popular, recent and top rated rows
    pub all: Vec<Movie>,
}

impl MovieCatalog {
    pub fn load() -> Self {
        let popular = popular_movies();
        let recent = recent_movies();
        let top_rated = top_rated_movies();

        let mut all = Vec::new();
        all.extend(action_movies());
        all.extend(comedy_movies());
        all.extend(drama_movies());
        all.extend(horror_movies());
        all.extend(popular.iter().cloned());
        all.extend(recent.iter().cloned());
        all.extend(top_rated.iter().cloned());

        Self {
            popular,
            recent,
            top_rated,
            all,
        }
    }

    /// Headline movie for the top of the screen
    pub fn featured(&self) -> Option<&Movie> {
        self.popular.first()
    }

    pub fn find(&self, id: &str) -> Option<&Movie> {
        self.all.iter().find(|m| m.id == id)
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title_arabic: &str,
    title_english: &str,
    description: &str,
    poster: &str,
    year: u16,
    rating: f32,
    duration: &str,
    genre: &str,
    tmdb_id: u32,
) -> Movie {
    Movie::new(
        id,
        title_arabic,
        title_english,
        description,
        format!("{}/{}", POSTER_BASE, poster),
        year,
        rating,
        duration,
        genre,
        Some(format!("https://vidsrc.to/embed/movie/{}", tmdb_id)),
        Some(format!("https://embedme.top/embed/movie/{}", tmdb_id)),
    )
}

fn popular_movies() -> Vec<Movie> {
    vec![
        listing(
            "1",
            "أفاتار: طريق الماء",
            "Avatar: The Way of Water",
            "انطلاقة ملحمية جديدة من أفاتار تأخذنا في رحلة مذهلة تحت الماء",
            "t6HIqrRAclMCA60NsSmeqe9RmNV.jpg",
            2022,
            8.1,
            "192 دقيقة",
            "Action/Adventure",
            76600,
        )
        .with_director("James Cameron")
        .with_origin("USA", "English"),
        listing(
            "2",
            "الرجل العنكبوت: لا عودة للوطن",
            "Spider-Man: No Way Home",
            "بيتر باركر يواجه أعداءه من عوالم متعددة في مغامرة استثنائية",
            "1g0dhYtq4irTY1GPXvft6k4YLjm.jpg",
            2021,
            8.4,
            "148 دقيقة",
            "Action/Adventure",
            634649,
        ),
        listing(
            "3",
            "توب غان: مافريك",
            "Top Gun: Maverick",
            "بيت ميتشل يعود بعد أكثر من ثلاثين عاماً كطيار متميز",
            "62HCnUTziyWcpDaBO2i1DX17ljH.jpg",
            2022,
            8.3,
            "130 دقيقة",
            "Action/Drama",
            361743,
        ),
    ]
}

fn recent_movies() -> Vec<Movie> {
    vec![
        listing(
            "4",
            "باربي",
            "Barbie",
            "باربي تنطلق في مغامرة ملونة من عالم الألعاب إلى العالم الحقيقي",
            "iuFNMS8U5cb6xfzi51Dbkovj7vM.jpg",
            2023,
            7.2,
            "114 دقيقة",
            "Comedy/Fantasy",
            346698,
        ),
        listing(
            "5",
            "الصوت",
            "Sound of Freedom",
            "قصة حقيقية عن رجل يحارب تجارة الأطفال",
            "kSf9svfL2WrKeuK8W08xeR5lTn8.jpg",
            2023,
            7.7,
            "131 دقيقة",
            "Drama/Thriller",
            678512,
        ),
        listing(
            "6",
            "المحولات: صعود الوحوش",
            "Transformers: Rise of the Beasts",
            "مغامرة جديدة مع المحولات في التسعينيات",
            "gPbM0MK8CP8A174rmUwGsADNYKD.jpg",
            2023,
            6.0,
            "127 دقيقة",
            "Action/Sci-Fi",
            667538,
        ),
    ]
}

fn top_rated_movies() -> Vec<Movie> {
    vec![
        listing(
            "7",
            "العراب",
            "The Godfather",
            "ملحمة العائلة الإيطالية في عالم الجريمة المنظمة",
            "3bhkrj58Vtu7enYsRolD1fZdja1.jpg",
            1972,
            9.2,
            "175 دقيقة",
            "Crime/Drama",
            238,
        )
        .with_director("Francis Ford Coppola")
        .with_cast(&["Marlon Brando", "Al Pacino", "James Caan"])
        .with_origin("USA", "English"),
        listing(
            "8",
            "الفارس الأسود",
            "The Dark Knight",
            "باتمان يواجه الجوكر في معركة ملحمية للخير والشر",
            "qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            2008,
            9.0,
            "152 دقيقة",
            "Action/Crime",
            155,
        )
        .with_director("Christopher Nolan")
        .with_cast(&["Christian Bale", "Heath Ledger"]),
        listing(
            "9",
            "قائمة شندلر",
            "Schindler's List",
            "قصة حقيقية عن رجل أعمال ألماني ينقذ أرواح اليهود",
            "sF1U4EUQS8YHUYjNl3pMGNIQyr0.jpg",
            1993,
            8.9,
            "195 دقيقة",
            "Biography/Drama",
            424,
        ),
    ]
}

fn action_movies() -> Vec<Movie> {
    vec![
        listing(
            "10",
            "جون ويك",
            "John Wick",
            "قاتل محترف يخرج من اعتزاله للانتقام",
            "fZUDiWH3hg6VJBmKfIexMECtdI0.jpg",
            2014,
            7.4,
            "101 دقيقة",
            "Action/Thriller",
            245891,
        ),
        listing(
            "11",
            "ماد ماكس: طريق الغضب",
            "Mad Max: Fury Road",
            "في عالم ما بعد الكارثة، ماكس ينضم لفوريوسا في رحلة هروب",
            "hA2ple9q4qnwxp3hKVNhroipsir.jpg",
            2015,
            8.1,
            "120 دقيقة",
            "Action/Adventure",
            76341,
        ),
        listing(
            "12",
            "المهمة المستحيلة",
            "Mission: Impossible",
            "إيثان هانت في مهام سرية مستحيلة",
            "VuukZLgaCrho2Ar8Scl9HtV3yD.jpg",
            1996,
            7.1,
            "110 دقيقة",
            "Action/Adventure",
            954,
        ),
    ]
}

fn comedy_movies() -> Vec<Movie> {
    vec![
        listing(
            "13",
            "الدب الأزرق",
            "Ted",
            "رجل وصديقه دب الطفولة المتحرك",
            "r6lWGMzJPO62EAnWzLdyVxmJHHb.jpg",
            2012,
            6.9,
            "106 دقائق",
            "Comedy",
            72105,
        ),
        listing(
            "14",
            "في الصميم",
            "Inside Out",
            "رحلة داخل عقل فتاة صغيرة ومشاعرها",
            "2H1TmgdfNtsKlU9jKdeNyYL5y8T.jpg",
            2015,
            8.1,
            "95 دقيقة",
            "Animation/Comedy",
            150540,
        ),
    ]
}

fn drama_movies() -> Vec<Movie> {
    vec![
        listing(
            "15",
            "فورست غامب",
            "Forrest Gump",
            "رجل بسيط يعيش أحداثاً استثنائية في التاريخ الأمريكي",
            "arw2vcBveWOVZr6pxd9XTd1TdQa.jpg",
            1994,
            8.8,
            "142 دقيقة",
            "Drama/Romance",
            13,
        ),
        listing(
            "16",
            "الحياة جميلة",
            "Life Is Beautiful",
            "أب يحمي ابنه من أهوال الحرب بالخيال والحب",
            "f7DImXDebOs148U4uPjI61iDvaK.jpg",
            1997,
            8.6,
            "116 دقيقة",
            "Comedy/Drama",
            637,
        )
        .with_origin("Italy", "Italian"),
    ]
}

fn horror_movies() -> Vec<Movie> {
    vec![
        listing(
            "17",
            "الراهبة",
            "The Nun",
            "راهبة شابة تواجه قوة شريرة في الدير",
            "sFC1ElvoKGdHJIWRpNB3xWJ9lJA.jpg",
            2018,
            5.3,
            "96 دقيقة",
            "Horror/Mystery",
            438808,
        ),
        listing(
            "18",
            "إنه",
            "It",
            "مجموعة من الأطفال تواجه مهرجاً شريراً",
            "9E2y5Q7WlCVNEhP5GiVTjhEhx1o.jpg",
            2017,
            7.3,
            "135 دقيقة",
            "Horror/Thriller",
            346364,
        ),
    ]
}
