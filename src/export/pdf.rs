use crate::core::{Alignment, ReportDocument};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Low-level A4 document writer for the work history report.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Map text to WinAnsi bytes for the built-in Helvetica font.
/// Polish letters outside the code page lose their diacritic.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            c if (c as u32) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
            'ą' => b'a',
            'Ą' => b'A',
            'ć' => b'c',
            'Ć' => b'C',
            'ę' => b'e',
            'Ę' => b'E',
            'ł' => b'l',
            'Ł' => b'L',
            'ń' => b'n',
            'Ń' => b'N',
            'ś' => b's',
            'Ś' => b'S',
            'ź' | 'ż' => b'z',
            'Ź' | 'Ż' => b'Z',
            _ => b'?',
        })
        .collect()
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            line_h: 14.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 10.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Draw the page number and write the page stream.
    fn finalize_page(&mut self, mut content: Content, page: usize) {
        let label = format!("Strona {}", page);
        let x = self.page_w - self.margin - self.text_width(&label, self.font_size);
        self.draw_text(&mut content, x, self.margin - 30.0, self.font_size, &label);

        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Approximate Helvetica advance: half the font size per glyph.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }

    fn wrap_columns(&self, size: f32) -> usize {
        ((self.page_w - 2.0 * self.margin) / (size * 0.5)) as usize
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encode_win_ansi(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_row(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        size: f32,
    ) {
        let mut x = self.margin;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            self.draw_text(content, x + 4.0, y + 6.0, size, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    fn draw_header_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        header: &[String],
    ) {
        self.fill_row(content, y, col_widths.iter().sum(), 0.85);
        self.draw_row(content, y, col_widths, header, self.header_font_size);
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, header: &[String], rows: &[Vec<String>]) -> Vec<f32> {
        let cell_w = |s: &str, size: f32| self.text_width(s, size) + 8.0;

        let mut widths: Vec<f32> = header
            .iter()
            .map(|h| cell_w(h, self.header_font_size))
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell_w(cell, self.font_size));
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// Lay out the whole report. The table header is repeated on every page.
    pub fn write_document(&mut self, doc: &ReportDocument) {
        let mut page_no = 1;
        let mut content = self.new_page();
        let mut y = self.page_h - self.margin - self.title_font_size;

        self.draw_text(&mut content, self.margin, y, self.title_font_size, &doc.title);
        y -= 8.0;

        let cols = self.wrap_columns(self.font_size);
        for line in &doc.lines {
            for part in textwrap::wrap(line, cols) {
                y -= self.line_h;
                self.draw_text(&mut content, self.margin, y, self.font_size, &part);
            }
        }
        y -= self.line_h;

        let header = doc.header();
        let rows = doc.body_rows();
        let col_widths = self.compute_col_widths(header, rows);
        let table_w: f32 = col_widths.iter().sum();

        y -= self.row_h;
        self.draw_header_row(&mut content, y, &col_widths, header);

        for (i, row) in rows.iter().enumerate() {
            if y - self.row_h < self.margin {
                self.finalize_page(content, page_no);
                page_no += 1;
                content = self.new_page();
                y = self.page_h - self.margin - self.row_h;
                self.draw_header_row(&mut content, y, &col_widths, header);
            }

            y -= self.row_h;

            // zebra stripe
            if i % 2 == 0 {
                self.fill_row(&mut content, y, table_w, 0.96);
            }

            self.draw_row(&mut content, y, &col_widths, row, self.font_size);
        }

        let closing = textwrap::wrap(&doc.closing.text, cols);
        let needed = doc.closing.margin_top + self.line_h * closing.len() as f32;
        if y - needed < self.margin {
            self.finalize_page(content, page_no);
            page_no += 1;
            content = self.new_page();
            y = self.page_h - self.margin;
        }

        y -= doc.closing.margin_top;
        for part in closing {
            y -= self.line_h;
            let x = match doc.closing.alignment {
                Alignment::Left => self.margin,
                Alignment::Right => {
                    self.page_w - self.margin - self.text_width(&part, self.font_size)
                }
            };
            self.draw_text(&mut content, x, y, self.font_size, &part);
        }

        self.finalize_page(content, page_no);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Close the catalog and page tree and return the file bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}
