/// One scraped detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: String,
    pub price: String,
    pub image_url: String,
    pub url: String,
    pub time: String,
}

/// Output columns, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Price,
    ImageUrl,
    Url,
    Time,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Title,
        Column::Price,
        Column::ImageUrl,
        Column::Url,
        Column::Time,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Price => "Price",
            Column::ImageUrl => "ImageURL",
            Column::Url => "URL",
            Column::Time => "Time",
        }
    }
}

impl ProductRecord {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Title => &self.title,
            Column::Price => &self.price,
            Column::ImageUrl => &self.image_url,
            Column::Url => &self.url,
            Column::Time => &self.time,
        }
    }

    pub(crate) fn set(&mut self, column: Column, value: String) {
        let slot = match column {
            Column::Title => &mut self.title,
            Column::Price => &mut self.price,
            Column::ImageUrl => &mut self.image_url,
            Column::Url => &mut self.url,
            Column::Time => &mut self.time,
        };
        *slot = value;
    }
}
