use yew::prelude::*;

/// SVG path through `values`, scaled to fill `width` x `height` minus `padding`
/// above and below. A single value is drawn as a flat line.
pub fn sparkline_path(values: &[f64], width: f64, height: f64, padding: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0 // Avoid division by zero for flat lines
    } else {
        max - min
    };
    let y_of = |val: f64| padding + (1.0 - (val - min) / range) * (height - 2.0 * padding);

    if let [only] = values {
        let y = y_of(*only);
        return format!("M 0.00,{y:.2} L {width:.2},{y:.2}");
    }

    let step = width / (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, &val)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {:.2},{:.2}", i as f64 * step, y_of(val))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub data: Vec<f64>,

    #[prop_or(96)]
    pub width: u32,

    #[prop_or(24)]
    pub height: u32,

    #[prop_or_else(|| "#06b6d4".to_string())]
    pub color: String,

    #[prop_or(1.5)]
    pub stroke_width: f64,
}

#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    let width = f64::from(props.width);
    let height = f64::from(props.height);
    let path_data = sparkline_path(&props.data, width, height, 2.0);

    html! {
        <svg
            class="sparkline"
            viewBox={format!("0 0 {} {}", props.width, props.height)}
            width={props.width.to_string()}
            height={props.height.to_string()}
            preserveAspectRatio="none"
        >
            <path
                d={path_data}
                fill="none"
                stroke={props.color.clone()}
                stroke-width={props.stroke_width.to_string()}
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}
