//! Inline SVG charts for the dashboard.

use std::f64::consts::PI;

use yew::prelude::*;

use crate::format::{format_idr, format_idr_plain};
use crate::stats::{CategorySlice, DailyPoint};

pub const INCOME_COLOR: &str = "#00C49F";
pub const EXPENSE_COLOR: &str = "#FF8042";
pub const SLICE_COLORS: [&str; 6] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AA336A", "#8855FF"];

const TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBox {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotBox {
    fn inner_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    fn inner_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.left + self.inner_width() / 2.0
        } else {
            self.left + self.inner_width() * index as f64 / (count - 1) as f64
        }
    }

    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.top + self.inner_height() * (1.0 - (value / max).clamp(0.0, 1.0))
    }
}

const LINE_PLOT: PlotBox = PlotBox {
    width: 640.0,
    height: 300.0,
    left: 80.0,
    right: 16.0,
    top: 16.0,
    bottom: 40.0,
};

pub fn line_points(values: &[f64], max: f64, plot: &PlotBox) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (plot.x_at(i, values.len()), plot.y_at(*v, max)))
        .collect()
}

/// Evenly spaced tick values from zero up to `max`, inclusive.
pub fn axis_ticks(max: f64, count: usize) -> Vec<f64> {
    if max <= 0.0 || count < 2 {
        return vec![0.0];
    }
    (0..count)
        .map(|i| max * i as f64 / (count - 1) as f64)
        .collect()
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub points: Vec<DailyPoint>,
}

#[function_component(IncomeExpenseChart)]
pub fn income_expense_chart(props: &LineChartProps) -> Html {
    let plot = LINE_PLOT;
    let max = props
        .points
        .iter()
        .flat_map(|p| [p.income, p.expense])
        .fold(0.0_f64, f64::max);

    let incomes: Vec<f64> = props.points.iter().map(|p| p.income).collect();
    let expenses: Vec<f64> = props.points.iter().map(|p| p.expense).collect();
    let income_line = line_points(&incomes, max, &plot);
    let expense_line = line_points(&expenses, max, &plot);
    let count = props.points.len();

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {} {}", plot.width, plot.height)} width="100%" height="300" role="img">
                { for axis_ticks(max, TICK_COUNT).into_iter().map(|tick| {
                    let y = plot.y_at(tick, max);
                    html! {
                        <g>
                            <line x1={plot.left.to_string()} x2={(plot.width - plot.right).to_string()}
                                y1={y.to_string()} y2={y.to_string()}
                                stroke="#ddd" stroke-dasharray="3 3" />
                            <text x={(plot.left - 8.0).to_string()} y={(y + 4.0).to_string()}
                                text-anchor="end" font-size="11">
                                { format_idr_plain(tick) }
                            </text>
                        </g>
                    }
                }) }
                { for props.points.iter().enumerate().map(|(i, p)| {
                    let x = plot.x_at(i, count);
                    html! {
                        <text x={x.to_string()} y={(plot.height - plot.bottom + 18.0).to_string()}
                            text-anchor="middle" font-size="11">
                            { p.date.clone() }
                        </text>
                    }
                }) }
                <polyline points={points_attr(&income_line)} fill="none" stroke={INCOME_COLOR} stroke-width="2" />
                <polyline points={points_attr(&expense_line)} fill="none" stroke={EXPENSE_COLOR} stroke-width="2" />
                { for income_line.iter().zip(props.points.iter()).map(|((x, y), p)| html! {
                    <circle cx={x.to_string()} cy={y.to_string()} r="3" fill={INCOME_COLOR}>
                        <title>{ format!("{} income: {}", p.date, format_idr(p.income)) }</title>
                    </circle>
                }) }
                { for expense_line.iter().zip(props.points.iter()).map(|((x, y), p)| html! {
                    <circle cx={x.to_string()} cy={y.to_string()} r="3" fill={EXPENSE_COLOR}>
                        <title>{ format!("{} expense: {}", p.date, format_idr(p.expense)) }</title>
                    </circle>
                }) }
            </svg>
            <div class="legend">
                <span style={format!("color: {}", INCOME_COLOR)}>{"● Income"}</span>
                <span style={format!("color: {}", EXPENSE_COLOR)}>{"● Expense"}</span>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start: f64,
    pub end: f64,
}

/// Angles in radians, clockwise from twelve o'clock. Empty when there is
/// nothing to draw.
pub fn pie_arcs(values: &[f64]) -> Vec<SliceArc> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let end = start + v / total * 2.0 * PI;
            let arc = SliceArc { start, end };
            start = end;
            arc
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

pub fn arc_path(cx: f64, cy: f64, r: f64, arc: &SliceArc) -> String {
    let (x0, y0) = polar(cx, cy, r, arc.start);
    let (x1, y1) = polar(cx, cy, r, arc.end);
    let large = if arc.end - arc.start > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x0, y0, r, r, large, x1, y1
    )
}

pub fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub slices: Vec<CategorySlice>,
}

#[function_component(CategoryPieChart)]
pub fn category_pie_chart(props: &PieChartProps) -> Html {
    let (cx, cy, r) = (200.0, 150.0, 100.0);
    let values: Vec<f64> = props.slices.iter().map(|s| s.value).collect();
    let arcs = pie_arcs(&values);

    html! {
        <div class="chart">
            <svg viewBox="0 0 400 300" width="100%" height="300" role="img">
                { for arcs.iter().zip(props.slices.iter()).enumerate().map(|(i, (arc, slice))| {
                    let label = format!("{}: {}", slice.name, format_idr(slice.value));
                    let (lx, ly) = polar(cx, cy, r + 18.0, (arc.start + arc.end) / 2.0);
                    let anchor = if lx >= cx { "start" } else { "end" };
                    let shape = if arcs.len() == 1 {
                        html! { <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} fill={slice_color(i)} /> }
                    } else {
                        html! { <path d={arc_path(cx, cy, r, arc)} fill={slice_color(i)} stroke="#fff" /> }
                    };
                    html! {
                        <g>
                            { shape }
                            <text x={lx.to_string()} y={ly.to_string()} text-anchor={anchor} font-size="11">{ label }</text>
                        </g>
                    }
                }) }
            </svg>
            <div class="legend">
                { for props.slices.iter().enumerate().map(|(i, s)| html! {
                    <span style={format!("color: {}", slice_color(i))}>{ format!("● {}", s.name) }</span>
                }) }
            </div>
        </div>
    }
}
