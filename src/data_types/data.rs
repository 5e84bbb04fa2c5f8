use serde::{Deserialize, Serialize};

/// A point in data space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A named, ordered list of points tagged with the scale group whose Y axis it uses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    title: String,
    scale_group: usize,
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(title: impl Into<String>, scale_group: usize) -> Self {
        Self {
            title: title.into(),
            scale_group,
            points: vec![],
        }
    }

    pub fn with_points<I, P>(title: impl Into<String>, scale_group: usize, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        Self {
            title: title.into(),
            scale_group,
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scale_group(&self) -> usize {
        self.scale_group
    }

    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push(DataPoint::new(x, y));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.x)
    }

    pub fn y(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.y)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Swaps the whole point list in one step, so readers never see a partial update.
    pub fn replace_points<I, P>(&mut self, points: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        self.points = points.into_iter().map(Into::into).collect();
    }

    /// Returns `(x_min, x_max, y_min, y_max)`, or `None` for an empty series.
    pub fn get_min_max(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold(
            (first.x, first.x, first.y, first.y),
            |(x_min, x_max, y_min, y_max), p| {
                (x_min.min(p.x), x_max.max(p.x), y_min.min(p.y), y_max.max(p.y))
            },
        ))
    }

    pub fn min_x(&self) -> Option<f64> {
        self.get_min_max().map(|b| b.0)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.get_min_max().map(|b| b.1)
    }

    pub fn min_y(&self) -> Option<f64> {
        self.get_min_max().map(|b| b.2)
    }

    pub fn max_y(&self) -> Option<f64> {
        self.get_min_max().map(|b| b.3)
    }
}

/// Index-addressable collection of series; insertion order is index order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    series: Vec<Series>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series(&mut self, series: Series) -> usize {
        self.series.push(series);
        self.series.len() - 1
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn series_at(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    pub fn series_at_mut(&mut self, index: usize) -> Option<&mut Series> {
        self.series.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }
}

impl FromIterator<Series> for Dataset {
    fn from_iter<T: IntoIterator<Item = Series>>(iter: T) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}
