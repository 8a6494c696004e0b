use common::model::movie::Movie;

pub struct HomePage {
    /// Text of the movie search box.
    pub search: String,
    /// User id typed into the "create recommendations" form.
    pub create_user_id: String,
    /// User id typed into the "open recommendations" form.
    pub fetch_user_id: String,
    /// Recommendations of the configured featured user, in server order.
    pub featured: Vec<Movie>,
    /// Guard so the featured shelf is requested once.
    pub loaded: bool,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            create_user_id: String::new(),
            fetch_user_id: String::new(),
            featured: Vec::new(),
            loaded: false,
        }
    }
}
