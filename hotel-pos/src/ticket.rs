//! Order ticket renderer
//!
//! Prints a held order for the kitchen/bar: outlet and table up top, one
//! line per item, total at the bottom.

use chrono::DateTime;
use hotel_printer::EscPosBuilder;
use rust_decimal::Decimal;
use shared::dto::TransactionCreateDto;

pub struct OrderTicketRenderer {
    width: usize,
}

impl OrderTicketRenderer {
    /// 32 columns on 58mm paper, 48 on 80mm
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Lay out the ticket; call `build()` for printer bytes or `build_raw()`
    /// for a UTF-8 preview
    pub fn render(&self, order: &TransactionCreateDto, outlet_name: &str) -> EscPosBuilder {
        let mut b = EscPosBuilder::new(self.width);
        self.render_header(&mut b, order, outlet_name);
        self.render_items(&mut b, order);
        self.render_footer(&mut b, order);
        b
    }

    fn render_header(&self, b: &mut EscPosBuilder, order: &TransactionCreateDto, outlet_name: &str) {
        b.center();
        b.double_size();
        b.bold();
        b.line(order.table_no.as_deref().unwrap_or("HOLD"));
        b.bold_off();
        b.reset_size();
        b.line(outlet_name);
        b.left();
        b.sep_double();
        b.line_lr("Doc", &order.doc_no);
        b.line_lr("Time", &format_time(&order.tran_date));
        if let Some(method) = &order.delivery_method {
            b.line_lr("Service", method);
        }
        b.sep_single();
    }

    fn render_items(&self, b: &mut EscPosBuilder, order: &TransactionCreateDto) {
        for item in &order.items {
            b.line_lr(
                &format!("{} x{}", item.item_name, item.qty),
                &money(item.amount),
            );
        }
    }

    fn render_footer(&self, b: &mut EscPosBuilder, order: &TransactionCreateDto) {
        let count: u32 = order.items.iter().map(|i| i.qty).sum();
        b.sep_single();
        b.line_lr("Items", &count.to_string());
        b.bold();
        b.line_lr("TOTAL", &money(order.tran_value));
        b.bold_off();
        b.cut(4);
    }
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn format_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
