use leptos::*;
use leptos_meta::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="Culture DBについて"/>

        <div class="container page about-page">
            <h1 class="page-title">"Culture DBについて"</h1>
            <p class="about-lead">"映画と音楽のための、コミュニティ主導型データベース。"</p>

            <p>
                "Culture DBは、映画や音楽などのカルチャーコンテンツを整理し、共有するためのプラットフォームです。"
                "お気に入りの作品を見つけたり、自分だけのコレクションを作成したりすることができます。"
            </p>

            <h3>"ミッション"</h3>
            <p>
                "私たちのミッションは、世界中の素晴らしいカルチャーコンテンツを誰もが簡単にアクセスできるようにすることです。"
                "隠れた名作から最新のヒット作まで、幅広い情報を網羅することを目指しています。"
            </p>

            <h3>"主な機能"</h3>
            <ul>
                <li><strong>"検索機能: "</strong>"タイトルやキーワードから作品を素早く検索できます。"</li>
                <li><strong>"カテゴリ別表示: "</strong>"映画や音楽といったジャンルごとに作品を閲覧できます。"</li>
                <li><strong>"詳細情報: "</strong>"各作品のあらすじ、公開日、アーティスト情報などを確認できます。"</li>
            </ul>

            <p>"このプロジェクトは現在開発中です。フィードバックや機能リクエストをお待ちしております。"</p>
        </div>
    }
}
