use ratatui::{prelude::*, widgets::*};

use crate::constants::{
    BIT_WEIGHTS, LARGE_CONTROL_SIZE, LARGE_READOUT_SIZE, MIN_SCREEN_WIDTH, OCTET_COUNT,
};
use crate::models::{Address, FontScale, BITS_PER_OCTET};

/// Width of one octet column in the header
const HEADER_COLUMN_WIDTH: usize = 10;

/// What a mouse click landed on
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HitTarget {
    Bit { octet: usize, bit: usize },
    Clear,
}

/// How much framing the screen can afford
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Density {
    /// Bordered panels, readout box and Clear button
    Boxed,
    /// Top rules only, one-line Clear control, no example binary row
    Compact,
}

/// A layout variant and the rows it needs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fit {
    pub density: Density,
    pub cell_height: u16,
    pub readout_padding: bool,
    /// Separator line and status bar
    pub chrome: bool,
}

impl Fit {
    pub fn header_height(&self) -> u16 {
        match self.density {
            Density::Boxed => 4,
            Density::Compact => 3,
        }
    }

    /// Title rule (and bottom border when boxed), bit labels, cells, weight labels
    pub fn panel_height(&self) -> u16 {
        match self.density {
            Density::Boxed => 2 + 1 + self.cell_height + 1,
            Density::Compact => 1 + 1 + self.cell_height + 1,
        }
    }

    pub fn readout_height(&self) -> u16 {
        let padding = self.readout_block_padding();
        let borders = match self.density {
            Density::Boxed => 2,
            Density::Compact => 1,
        };
        borders + padding.top + padding.bottom + 2
    }

    pub fn clear_height(&self) -> u16 {
        match self.density {
            Density::Boxed => 3,
            Density::Compact => 1,
        }
    }

    pub fn separator_height(&self) -> u16 {
        u16::from(self.chrome && self.density == Density::Boxed)
    }

    pub fn status_height(&self) -> u16 {
        u16::from(self.chrome)
    }

    /// Rows needed to draw this variant without clipping anything
    pub fn height(&self) -> u16 {
        self.header_height()
            + self.separator_height()
            + OCTET_COUNT as u16 * self.panel_height()
            + self.readout_height()
            + self.clear_height()
            + self.status_height()
    }

    pub fn panel_borders(&self) -> Borders {
        match self.density {
            Density::Boxed => Borders::ALL,
            Density::Compact => Borders::TOP,
        }
    }

    pub fn readout_block_padding(&self) -> Padding {
        if self.readout_padding {
            Padding::vertical(1)
        } else {
            Padding::default()
        }
    }
}

/// Smallest variant; anything below it is "terminal too small"
pub const MIN_FIT: Fit = Fit {
    density: Density::Compact,
    cell_height: 1,
    readout_padding: false,
    chrome: false,
};

/// Height of a toggle cell the scale asks for
pub fn cell_height(scale: FontScale) -> u16 {
    if scale.control >= LARGE_CONTROL_SIZE {
        3
    } else {
        1
    }
}

/// Pick the richest variant that fits. Scale-driven extras go first, then
/// the separator and status bar, then the panel and readout borders.
pub fn choose_fit(area: Rect, scale: FontScale) -> Option<Fit> {
    if area.width < MIN_SCREEN_WIDTH {
        return None;
    }

    let cells = cell_height(scale);
    let pad = scale.readout >= LARGE_READOUT_SIZE;
    let boxed = |cell_height, readout_padding, chrome| Fit {
        density: Density::Boxed,
        cell_height,
        readout_padding,
        chrome,
    };

    [
        boxed(cells, pad, true),
        boxed(cells, false, true),
        boxed(1, pad, true),
        boxed(1, false, true),
        boxed(1, false, false),
        Fit { chrome: true, ..MIN_FIT },
        MIN_FIT,
    ]
    .into_iter()
    .find(|fit| fit.height() <= area.height)
}

/// Top-level screen regions
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub fit: Fit,
    pub header: Rect,
    pub separator: Rect,
    pub octets: [Rect; OCTET_COUNT],
    pub readout: Rect,
    pub clear: Rect,
    pub status: Rect,
}

/// Regions inside one octet panel
#[derive(Debug, Clone, Copy)]
pub struct OctetLayout {
    pub labels: [Rect; BITS_PER_OCTET],
    pub cells: [Rect; BITS_PER_OCTET],
    pub weights: [Rect; BITS_PER_OCTET],
}

/// Split the whole screen, or `None` when the terminal is too small.
/// Drawing and mouse hit-testing both go through here.
pub fn screen_layout(area: Rect, scale: FontScale) -> Option<ScreenLayout> {
    let fit = choose_fit(area, scale)?;
    let panel = Constraint::Length(fit.panel_height());
    let [header, separator, o1, o2, o3, o4, readout, clear_row, _, status] = Layout::vertical([
        Constraint::Length(fit.header_height()),
        Constraint::Length(fit.separator_height()),
        panel,
        panel,
        panel,
        panel,
        Constraint::Length(fit.readout_height()),
        Constraint::Length(fit.clear_height()),
        Constraint::Min(0),
        Constraint::Length(fit.status_height()),
    ])
    .areas(area);

    let [_, clear, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(clear_label(fit).len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .areas(clear_row);

    Some(ScreenLayout {
        fit,
        header,
        separator,
        octets: [o1, o2, o3, o4],
        readout,
        clear,
        status,
    })
}

/// Split one octet panel (outer area, borders included)
pub fn octet_layout(area: Rect, fit: Fit) -> OctetLayout {
    let inner = Block::new().borders(fit.panel_borders()).inner(area);
    let [labels, cells, weights] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(fit.cell_height),
        Constraint::Length(1),
    ])
    .areas(inner);

    let columns = |row: Rect| -> [Rect; BITS_PER_OCTET] {
        Layout::horizontal([Constraint::Ratio(1, BITS_PER_OCTET as u32); BITS_PER_OCTET]).areas(row)
    };

    OctetLayout {
        labels: columns(labels),
        cells: columns(cells),
        weights: columns(weights),
    }
}

/// Find the control under a terminal cell
pub fn hit_test(area: Rect, scale: FontScale, column: u16, row: u16) -> Option<HitTarget> {
    let pos = Position::new(column, row);
    let screen = screen_layout(area, scale)?;

    if screen.clear.contains(pos) {
        return Some(HitTarget::Clear);
    }

    for (octet, panel) in screen.octets.iter().enumerate() {
        if !panel.contains(pos) {
            continue;
        }
        let layout = octet_layout(*panel, screen.fit);
        return layout
            .cells
            .iter()
            .position(|cell| cell.contains(pos))
            .map(|bit| HitTarget::Bit { octet, bit });
    }

    None
}

/// Text of the Clear control
pub fn clear_label(fit: Fit) -> &'static str {
    match fit.density {
        Density::Boxed => " Clear ",
        Density::Compact => "[ Clear ]",
    }
}

/// Header lines for the decorative example address
pub fn header_lines(example: &Address) -> Vec<Line<'static>> {
    let w = HEADER_COLUMN_WIDTH;
    let labels: Vec<String> = (1..=OCTET_COUNT).map(|i| format!("{:^w$}", format!("Octet {}", i))).collect();
    let decimals: Vec<String> = example
        .octets
        .iter()
        .map(|o| format!("{:^w$}", o.decimal_value()))
        .collect();
    let binaries: Vec<String> = example
        .octets
        .iter()
        .map(|o| format!("{:^w$}", o.binary_string()))
        .collect();

    vec![
        Line::from("Example IP Address:").bold(),
        Line::from(labels.join("   ")),
        Line::from(decimals.join(" . ")),
        Line::from(binaries.join(" . ")).fg(Color::DarkGray),
    ]
}

/// Shown instead of the widget when no variant fits
pub fn too_small_lines(area: Rect) -> Vec<Line<'static>> {
    vec![
        Line::from("Terminal too small").bold().fg(Color::Red),
        Line::from(format!(
            "need {}x{}, have {}x{}",
            MIN_SCREEN_WIDTH,
            MIN_FIT.height(),
            area.width,
            area.height
        )),
    ]
}

/// Style of a toggle cell
pub fn bit_style(set: bool, focused: bool) -> Style {
    let style = if set {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default()
    };
    if focused {
        style.bg(Color::DarkGray)
    } else {
        style
    }
}

/// Style of a bit label or weight label; red while its bit is set
pub fn label_style(set: bool) -> Style {
    if set {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Renders one toggle cell
pub fn render_bit_cell(set: bool, focused: bool, cell_height: u16) -> Paragraph<'static> {
    let style = bit_style(set, focused);
    let cell = Paragraph::new(if set { "1" } else { "0" })
        .alignment(Alignment::Center)
        .style(style);

    if cell_height > 1 {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        cell.block(Block::bordered().border_style(border_style))
    } else {
        cell
    }
}

/// Weight label text for a bit index
pub fn weight_label(index: usize) -> String {
    BIT_WEIGHTS.get(index).map(|w| w.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center(r: Rect) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    fn assert_every_cell_hits_itself(area: Rect, scale: FontScale) {
        let screen = screen_layout(area, scale).unwrap();
        for (octet, panel) in screen.octets.iter().enumerate() {
            let layout = octet_layout(*panel, screen.fit);
            for (bit, cell) in layout.cells.iter().enumerate() {
                assert!(cell.height > 0 && cell.width > 0, "{area:?}: octet {octet} bit {bit} has no cell");
                let (x, y) = center(*cell);
                assert_eq!(hit_test(area, scale, x, y), Some(HitTarget::Bit { octet, bit }));
            }
        }
    }

    #[test]
    fn test_every_cell_hits_itself() {
        let small = FontScale::for_width(400);
        let large = FontScale::for_width(1280);
        for (w, h) in [(100, 60), (80, 24), (80, 30), (160, 40), (50, 23)] {
            let area = Rect::new(0, 0, w, h);
            assert_every_cell_hits_itself(area, small);
            assert_every_cell_hits_itself(area, large);
        }
    }

    #[test]
    fn test_clear_and_misses() {
        let area = Rect::new(0, 0, 100, 60);
        let scale = FontScale::default();
        let screen = screen_layout(area, scale).unwrap();

        let (x, y) = center(screen.clear);
        assert_eq!(hit_test(area, scale, x, y), Some(HitTarget::Clear));

        let (x, y) = center(screen.header);
        assert_eq!(hit_test(area, scale, x, y), None);

        // Weight labels are not toggles
        let layout = octet_layout(screen.octets[0], screen.fit);
        let (x, y) = center(layout.weights[3]);
        assert_eq!(hit_test(area, scale, x, y), None);
    }

    #[test]
    fn test_fit_uses_scale_when_room() {
        let large = FontScale::for_width(1000);
        let fit = choose_fit(Rect::new(0, 0, 160, 60), large).unwrap();
        assert_eq!(fit.density, Density::Boxed);
        assert_eq!(fit.cell_height, 3);
        assert!(fit.readout_padding);
        assert!(fit.chrome);
        assert_eq!(fit.height(), 43);
    }

    #[test]
    fn test_fit_falls_back_to_single_row_cells() {
        // 160x40 with 3-row cells would need 41 rows
        let fit = choose_fit(Rect::new(0, 0, 160, 40), FontScale::for_width(1280)).unwrap();
        assert_eq!(fit.density, Density::Boxed);
        assert_eq!(fit.cell_height, 1);
        assert!(fit.readout_padding);
        assert!(fit.chrome);
    }

    #[test]
    fn test_fit_drops_chrome_before_borders() {
        let fit = choose_fit(Rect::new(0, 0, 80, 32), FontScale::default()).unwrap();
        assert_eq!(fit.density, Density::Boxed);
        assert!(!fit.chrome);
        assert_eq!(fit.height(), 31);
    }

    #[test]
    fn test_standard_terminal_is_compact_with_status() {
        let fit = choose_fit(Rect::new(0, 0, 80, 24), FontScale::default()).unwrap();
        assert_eq!(fit.density, Density::Compact);
        assert!(fit.chrome);
        assert_eq!(fit.height(), 24);
    }

    #[test]
    fn test_too_small() {
        assert_eq!(MIN_FIT.height(), 23);
        assert!(choose_fit(Rect::new(0, 0, 80, 22), FontScale::default()).is_none());
        assert!(choose_fit(Rect::new(0, 0, 49, 60), FontScale::default()).is_none());
        assert!(screen_layout(Rect::new(0, 0, 80, 22), FontScale::default()).is_none());
        assert_eq!(hit_test(Rect::new(0, 0, 80, 22), FontScale::default(), 5, 5), None);
    }

    #[test]
    fn test_fit_heights_never_exceed_area() {
        for h in 0..70 {
            let area = Rect::new(0, 0, 100, h);
            for scale in [FontScale::default(), FontScale::for_width(1280)] {
                if let Some(fit) = choose_fit(area, scale) {
                    assert!(fit.height() <= h);
                }
            }
        }
    }

    #[test]
    fn test_header_lines() {
        let example = Address::from(crate::constants::EXAMPLE_ADDRESS);
        let lines = header_lines(&example);
        assert_eq!(lines.len(), 4);
        let decimals = lines[2].to_string();
        assert!(decimals.contains("192"));
        assert!(decimals.contains("168"));
        assert_eq!(decimals.matches('.').count(), 3);
        assert!(lines[3].to_string().contains("11000000"));
        assert!(lines[1].to_string().contains("Octet 4"));
        assert!(lines[1].to_string().len() < MIN_SCREEN_WIDTH as usize);
    }

    #[test]
    fn test_weight_labels() {
        let labels: Vec<String> = (0..BITS_PER_OCTET).map(weight_label).collect();
        assert_eq!(labels.join(","), "128,64,32,16,8,4,2,1");
    }
}
